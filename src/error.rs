//! Error types for truth table generation
//!
//! Every failure aborts the whole request: a caller either gets a complete
//! table or one of these errors, never a partial table.

use crate::formula::FormulaError;
use std::fmt;
use std::io;
use std::time::Duration;

/// The main error type for truth table generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TruthTableError {
    /// The input contained nothing but whitespace or math delimiters
    EmptyInput,

    /// The formula is malformed or uses notation the normalizer does not know
    Formula(FormulaError),

    /// The formula has more variables than the configured limit allows
    ///
    /// Row count doubles with every variable, so the check happens before any
    /// row is evaluated.
    TooManyVariables {
        /// Number of distinct variables in the formula
        count: usize,
        /// The configured maximum
        limit: usize,
    },

    /// The formula nests operators deeper than the configured limit allows
    TooDeep {
        /// Nesting depth of the canonical formula
        depth: usize,
        /// The configured maximum
        limit: usize,
    },

    /// Generation was stopped through a [`CancelToken`](crate::CancelToken)
    Cancelled,

    /// Generation exceeded the configured timeout
    TimedOut {
        /// The configured budget that was exceeded
        after: Duration,
    },
}

impl fmt::Display for TruthTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruthTableError::EmptyInput => write!(f, "No formula given"),
            TruthTableError::Formula(err) => write!(f, "{}", err),
            TruthTableError::TooManyVariables { count, limit } => {
                write!(
                    f,
                    "Formula has {} variables, at most {} are allowed",
                    count, limit
                )?;
                let rows = u32::try_from(*count)
                    .ok()
                    .and_then(|shift| 1u128.checked_shl(shift));
                match rows {
                    Some(rows) => write!(f, " ({} rows would be generated)", rows),
                    None => Ok(()),
                }
            }
            TruthTableError::TooDeep { depth, limit } => write!(
                f,
                "Formula nests {} operators deep, at most {} are allowed",
                depth, limit
            ),
            TruthTableError::Cancelled => write!(f, "Truth table generation was cancelled"),
            TruthTableError::TimedOut { after } => write!(
                f,
                "Truth table generation timed out after {} ms",
                after.as_millis()
            ),
        }
    }
}

impl std::error::Error for TruthTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TruthTableError::Formula(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormulaError> for TruthTableError {
    fn from(err: FormulaError) -> Self {
        TruthTableError::Formula(err)
    }
}

impl From<TruthTableError> for io::Error {
    fn from(err: TruthTableError) -> Self {
        let kind = match err {
            TruthTableError::Cancelled => io::ErrorKind::Interrupted,
            TruthTableError::TimedOut { .. } => io::ErrorKind::TimedOut,
            _ => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::sync::Arc;

    #[test]
    fn test_too_many_variables_message() {
        let err = TruthTableError::TooManyVariables {
            count: 14,
            limit: 12,
        };
        let msg = err.to_string();
        assert!(msg.contains("14 variables"));
        assert!(msg.contains("at most 12"));
        assert!(msg.contains("16384 rows"));
    }

    #[test]
    fn test_too_many_variables_message_without_row_count() {
        let err = TruthTableError::TooManyVariables {
            count: 200,
            limit: 12,
        };
        assert_eq!(
            err.to_string(),
            "Formula has 200 variables, at most 12 are allowed"
        );

        let err = TruthTableError::TooManyVariables {
            count: usize::MAX,
            limit: 12,
        };
        assert!(!err.to_string().contains("rows"));
    }

    #[test]
    fn test_too_deep_message() {
        let err = TruthTableError::TooDeep {
            depth: 50_000,
            limit: 256,
        };
        assert_eq!(
            err.to_string(),
            "Formula nests 50000 operators deep, at most 256 are allowed"
        );
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_formula_error_is_source() {
        let inner = FormulaError::InvalidSyntax {
            message: Arc::from("bad token"),
            input: Arc::from("p ? q"),
            position: Some(2),
        };
        let err: TruthTableError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert!(err.source().is_some());
        assert!(TruthTableError::EmptyInput.source().is_none());
    }

    #[test]
    fn test_io_error_kinds() {
        let io_err: io::Error = TruthTableError::Cancelled.into();
        assert_eq!(io_err.kind(), io::ErrorKind::Interrupted);

        let io_err: io::Error = TruthTableError::TimedOut {
            after: Duration::from_millis(5),
        }
        .into();
        assert_eq!(io_err.kind(), io::ErrorKind::TimedOut);

        let io_err: io::Error = TruthTableError::EmptyInput.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
