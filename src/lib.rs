//! # LaTeX Truth Tables
//!
//! This crate turns a propositional formula written in LaTeX notation into a
//! truth table.
//!
//! ## Overview
//!
//! Generation runs through a fixed pipeline of pure stages:
//!
//! 1. [`normalize`](normalize::normalize) replaces LaTeX macros (`\wedge`,
//!    `\neg`, `\overline{...}`, ...) and braces with canonical operators
//! 2. [`eliminate_implications`](implication::eliminate_implications) rewrites
//!    every `A \to B` into `(!(A) || (B))`
//! 3. the canonical text is parsed into a [`Formula`] and its [`VariableSet`]
//!    is collected
//! 4. every assignment from [`Assignments`](assignment::Assignments) is
//!    evaluated
//! 5. [`render_markdown`](table::render_markdown) formats the rows
//!
//! Any failure aborts the whole request; there is no partial output.
//!
//! ## Quick Start
//!
//! ```
//! use latex_truth_table::generate_truth_table;
//!
//! # fn main() -> Result<(), latex_truth_table::TruthTableError> {
//! let table = generate_truth_table(r"p \wedge \neg q")?;
//! assert_eq!(
//!     table,
//!     "|$p$|$q$|$\\text{Result}$|\n\
//!      |-|-|-|\n\
//!      | 0 | 0 | 0 |\n\
//!      | 0 | 1 | 0 |\n\
//!      | 1 | 0 | 1 |\n\
//!      | 1 | 1 | 0 |"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! [`TruthTableGenerator`] takes a [`TruthTableConfig`] to bound the number of
//! variables or the nesting depth, relabel the result column, or put a wall-clock budget on
//! evaluation. Row evaluation can also be stopped from another thread through
//! a [`CancelToken`].
//!
//! ```
//! use latex_truth_table::{TruthTableConfig, TruthTableError, TruthTableGenerator};
//!
//! let generator = TruthTableGenerator::new(TruthTableConfig {
//!     max_variables: 2,
//!     ..Default::default()
//! });
//!
//! assert_eq!(
//!     generator.generate(r"p \wedge q \wedge r"),
//!     Err(TruthTableError::TooManyVariables { count: 3, limit: 2 })
//! );
//! ```
//!
//! ## Limitations
//!
//! - Variables are single lowercase letters.
//! - Substitution is literal: a variable named `T` or `F` is read as a
//!   constant.
//! - LaTeX outside the recognized macros passes through and is reported as a
//!   malformed expression.

// Public modules
pub mod assignment;
pub mod cancel;
pub mod error;
pub mod formula;
pub mod generator;
pub mod implication;
pub mod log;
pub mod normalize;
pub mod table;

// Re-export high-level public API
pub use cancel::CancelToken;
pub use error::TruthTableError;
pub use formula::{evaluate_expression, ExprNode, Formula, FormulaError, VariableSet};
pub use generator::{PreparedFormula, TruthTableGenerator};
pub use table::{Row, TruthTable};

use std::time::Duration;

/// Hard ceiling on the number of variables: there are 26 single-letter names
pub const MAX_VARIABLES: usize = 26;

/// Default header of the result column
pub const DEFAULT_RESULT_LABEL: &str = "Result";

/// Configuration for truth table generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTableConfig {
    /// Formulas with more distinct variables than this are rejected before any
    /// row is evaluated
    ///
    /// **Default:** `12` (4096 rows)
    pub max_variables: usize,

    /// Formulas nesting operators deeper than this are rejected before parsing
    ///
    /// Evaluation walks the tree recursively, so this bounds stack use.
    ///
    /// **Default:** `256`
    pub max_depth: usize,

    /// Header of the result column, rendered as `$\text{<label>}$`
    ///
    /// **Default:** `"Result"`
    pub result_label: String,

    /// Wall-clock budget for row evaluation
    ///
    /// **Default:** `None` (no limit)
    pub timeout: Option<Duration>,
}

impl Default for TruthTableConfig {
    fn default() -> Self {
        TruthTableConfig {
            max_variables: 12,
            max_depth: 256,
            result_label: DEFAULT_RESULT_LABEL.to_string(),
            timeout: None,
        }
    }
}

impl TruthTableConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// Generate a Markdown truth table for a LaTeX formula with the default
/// configuration
pub fn generate_truth_table(input: &str) -> Result<String, TruthTableError> {
    TruthTableGenerator::default().generate(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TruthTableConfig::new();
        assert_eq!(config.max_variables, 12);
        assert_eq!(config.max_depth, 256);
        assert_eq!(config.result_label, "Result");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_generate_implication() {
        let table = generate_truth_table(r"p \to q").unwrap();
        let rows: Vec<&str> = table.lines().skip(2).collect();
        assert_eq!(
            rows,
            vec!["| 0 | 0 | 1 |", "| 0 | 1 | 1 |", "| 1 | 0 | 0 |", "| 1 | 1 | 1 |"]
        );
    }

    #[test]
    fn test_generate_rejects_unknown_macro() {
        assert!(matches!(
            generate_truth_table(r"p \oplus q"),
            Err(TruthTableError::Formula(FormulaError::InvalidSyntax { .. }))
        ));
    }
}
