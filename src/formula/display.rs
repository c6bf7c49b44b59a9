//! Display formatting for formulas in canonical syntax

use super::Formula;
use std::fmt;

/// Context for formatting expressions with minimal parentheses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None, // Top level or inside parentheses
    And,  // Inside an AND operation
    Or,   // Inside an OR operation
    Not,  // Inside a NOT operation
}

impl Formula {
    /// Format with operator precedence context to minimize parentheses
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, ctx: OpContext) -> fmt::Result {
        match self {
            Formula::Variable(name) => write!(f, "{}", name),
            Formula::Constant(val) => write!(f, "{}", if *val { "1" } else { "0" }),

            Formula::And(left, right) => {
                let needs_parens = ctx == OpContext::Not;

                if needs_parens {
                    write!(f, "(")?;
                }
                left.fmt_with_context(f, OpContext::And)?;
                write!(f, " && ")?;
                right.fmt_with_context(f, OpContext::And)?;
                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }

            Formula::Or(left, right) => {
                // OR binds loosest
                let needs_parens = ctx == OpContext::And || ctx == OpContext::Not;

                if needs_parens {
                    write!(f, "(")?;
                }
                left.fmt_with_context(f, OpContext::Or)?;
                write!(f, " || ")?;
                right.fmt_with_context(f, OpContext::Or)?;
                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }

            Formula::Not(inner) => {
                write!(f, "!")?;
                inner.fmt_with_context(f, OpContext::Not)
            }
        }
    }
}

/// Canonical syntax with minimal parentheses: `!`, `&&`, `||`, `1`, `0`
///
/// The output parses back to an equivalent formula.
///
/// ```
/// use latex_truth_table::Formula;
///
/// let formula = Formula::parse("((p) && (!(q)))").unwrap();
/// assert_eq!(formula.to_string(), "p && !q");
/// ```
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, OpContext::None)
    }
}
