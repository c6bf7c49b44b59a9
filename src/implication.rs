//! Implication elimination
//!
//! Rewrites every `A \to B` into `(!(A) || (B))`. The rightmost arrow is
//! rewritten first; its operands extend outwards from the arrow until they
//! hit the bracket that encloses the implication, so the rewrite never crosses
//! a grouping boundary. Text outside that bracket is carried over verbatim.
//!
//! Unbalanced input is tolerated: when no enclosing bracket is found the
//! operand is the whole remaining side, and the parser reports the imbalance
//! later.

use crate::log::targets::IMPLICATION as LOG_IMPLICATION;
use crate::normalize::IMPLICATION;

/// Eliminate all implication arrows from a normalized expression.
///
/// Chained arrows without brackets group to the left, as each pass rewrites
/// the rightmost arrow with everything before it as the left operand.
///
/// # Examples
///
/// ```
/// use latex_truth_table::implication::eliminate_implications;
///
/// assert_eq!(eliminate_implications(r"p \to q"), "(!(p) || (q))");
/// assert_eq!(
///     eliminate_implications(r"r && (p \to q)"),
///     "r && ((!(p) || (q)))"
/// );
/// ```
pub fn eliminate_implications(expr: &str) -> String {
    let mut expression = expr.to_string();
    let mut passes = 0usize;

    while let Some(index) = expression.rfind(IMPLICATION) {
        let left = expression[..index].trim();
        let right = expression[index + IMPLICATION.len()..].trim();

        let rewritten = rewrite(left, right);
        log::trace!(target: LOG_IMPLICATION, "{:?} -> {:?}", expression, rewritten);

        expression = rewritten;
        passes += 1;
    }

    if passes > 0 {
        log::debug!(
            target: LOG_IMPLICATION,
            "Eliminated {} implication(s): {:?}",
            passes,
            expression
        );
    }
    expression
}

/// Rewrite one implication given the text on either side of its arrow.
fn rewrite(left: &str, right: &str) -> String {
    let (outer_left, left) = split_left_operand(left);
    let (right, outer_right) = split_right_operand(right);
    format!("{outer_left}(!({left}) || ({right})){outer_right}")
}

/// Split the text before an arrow into `(carried_over, operand)`.
///
/// Scans backwards; balanced groups belong to the operand, the first
/// unmatched `(` closes it and stays with the carried-over prefix.
fn split_left_operand(left: &str) -> (&str, &str) {
    let mut depth = 0i32;
    for (index, byte) in left.bytes().enumerate().rev() {
        match byte {
            b')' => depth += 1,
            b'(' => {
                depth -= 1;
                if depth < 0 {
                    return (&left[..=index], left[index + 1..].trim_start());
                }
            }
            _ => {}
        }
    }
    ("", left)
}

/// Split the text after an arrow into `(operand, carried_over)`.
///
/// Mirror image of [`split_left_operand`]: the first unmatched `)` ends the
/// operand and starts the carried-over suffix.
fn split_right_operand(right: &str) -> (&str, &str) {
    let mut depth = 0i32;
    for (index, byte) in right.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth < 0 {
                    return (right[..index].trim_end(), &right[index..]);
                }
            }
            _ => {}
        }
    }
    (right, "")
}
