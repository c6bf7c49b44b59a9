//! Truth tables and their rendering

mod render;

pub use render::render_markdown;

use crate::formula::VariableSet;
use crate::DEFAULT_RESULT_LABEL;
use std::fmt;

/// One assignment and the value the formula takes under it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    /// Variable values, aligned with the table's [`VariableSet`]
    pub assignment: Vec<bool>,
    /// The formula's value
    pub result: bool,
}

/// A complete truth table, rows in enumeration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: VariableSet,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Assemble a table from its columns and rows
    pub fn new(variables: VariableSet, rows: Vec<Row>) -> Self {
        TruthTable { variables, rows }
    }

    /// The variable columns
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// All rows in enumeration order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True only for a table built without rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The result column
    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.result)
    }

    /// True when every row evaluates to true
    pub fn is_tautology(&self) -> bool {
        self.results().all(|result| result)
    }

    /// True when some row evaluates to true
    pub fn is_satisfiable(&self) -> bool {
        self.results().any(|result| result)
    }

    /// Render as a Markdown table with `result_label` over the result column
    pub fn to_markdown(&self, result_label: &str) -> String {
        render_markdown(self, result_label)
    }
}

/// Markdown rendering with the default result label
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_markdown(DEFAULT_RESULT_LABEL))
    }
}
