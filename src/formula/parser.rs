//! Parsing support for canonical expressions

use super::error::FormulaError;
use super::Formula;
use lalrpop_util::ParseError;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/formula/canonical.rs"));
}

impl Formula {
    /// Parse a canonical expression
    ///
    /// Accepted syntax, from loosest to tightest binding:
    /// - `||` for OR
    /// - `&&` for AND
    /// - `!` for NOT
    /// - Parentheses for grouping
    /// - Constants `1` and `0`
    /// - Single lowercase letters as variables
    ///
    /// Anything else, including a leftover `\to` or a multi-letter word, is an
    /// [`FormulaError::InvalidSyntax`].
    ///
    /// # Examples
    ///
    /// ```
    /// use latex_truth_table::Formula;
    ///
    /// let formula = Formula::parse("!(p) || (q)").unwrap();
    /// assert_eq!(formula.to_string(), "!p || q");
    ///
    /// assert!(Formula::parse("p && (q").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, FormulaError> {
        parser_impl::ExprParser::new()
            .parse(input)
            .map_err(|e| FormulaError::InvalidSyntax {
                message: Arc::from(e.to_string()),
                input: Arc::from(input),
                position: error_position(&e),
            })
    }
}

/// Byte offset into the input where the parser gave up, when it knows one.
fn error_position<T, E>(error: &ParseError<usize, T, E>) -> Option<usize> {
    match error {
        ParseError::InvalidToken { location } => Some(*location),
        ParseError::UnrecognizedEof { location, .. } => Some(*location),
        ParseError::UnrecognizedToken {
            token: (start, _, _),
            ..
        } => Some(*start),
        ParseError::ExtraToken {
            token: (start, _, _),
        } => Some(*start),
        ParseError::User { .. } => None,
    }
}
