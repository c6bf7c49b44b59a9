//! Error types for canonical expression parsing and evaluation

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors raised while parsing or evaluating a canonical expression
///
/// Any of these aborts table generation as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// The expression is malformed: unbalanced parentheses, an unknown token,
    /// or LaTeX that normalization did not recognize
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The canonical expression that failed to parse
        input: Arc<str>,
        /// Byte offset in the input where the error occurred
        position: Option<usize>,
    },

    /// A variable in the expression has no value in the assignment
    UnboundVariable {
        /// The variable's name
        name: char,
    },
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaError::InvalidSyntax {
                message,
                input,
                position,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "Malformed expression at position {}: {}. Input: {:?}",
                        pos, message, input
                    )
                } else {
                    write!(f, "Malformed expression: {}. Input: {:?}", message, input)
                }
            }
            FormulaError::UnboundVariable { name } => {
                write!(f, "Variable '{}' has no value in the assignment", name)
            }
        }
    }
}

impl std::error::Error for FormulaError {}

impl From<FormulaError> for io::Error {
    fn from(err: FormulaError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
