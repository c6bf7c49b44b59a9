//! LaTeX notation normalization
//!
//! Turns LaTeX logical macros and brace grouping into the canonical operator
//! syntax understood by the [`formula`](crate::formula) parser. Substitution is
//! literal and sequential: every rule sees the output of the rules before it,
//! so the order of [`REPLACEMENTS`] is significant (`True` must be handled
//! before `T`, `False` before `F`).
//!
//! Implication arrows are normalized to `\to` but otherwise left in place for
//! [`eliminate_implications`](crate::implication::eliminate_implications).

use crate::log::targets::NORMALIZE;

/// The implication token recognized by the eliminator.
pub const IMPLICATION: &str = r"\to";

/// Alternative spellings folded into a table entry before the main pass.
///
/// `\top` has to go before implication scanning, it starts with `\to`.
pub const ALIASES: &[(&str, &str)] = &[
    (r"\rightarrow", IMPLICATION),
    (r"\Rightarrow", IMPLICATION),
    (r"\implies", IMPLICATION),
    (r"\lnot", "!"),
    (r"\top", "1"),
    (r"\bot", "0"),
];

/// Ordered replacement table.
pub const REPLACEMENTS: &[(&str, &str)] = &[
    (r"\text", ""),
    (r"\vee", "||"),
    (r"\lor", "||"),
    (r"\wedge", "&&"),
    (r"\land", "&&"),
    ("{", "("),
    ("}", ")"),
    (r"\overline", "!"),
    (r"\neg", "!"),
    ("True", "1"),
    ("T", "1"),
    ("true", "1"),
    ("False", "0"),
    ("F", "0"),
    ("false", "0"),
];

/// Normalize a raw LaTeX formula into canonical syntax (implications excepted).
///
/// A variable whose name collides with a table key (`T`, `F`) is rewritten
/// like any other occurrence of that key.
///
/// # Examples
///
/// ```
/// use latex_truth_table::normalize::normalize;
///
/// assert_eq!(normalize(r"p \wedge \neg q"), "p && !q");
/// assert_eq!(normalize(r"$\overline{p \lor q}$"), "!(p || q)");
/// assert_eq!(normalize(r"p \to q"), r"p \to q");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut result = strip_math_delimiters(raw).to_string();
    for (pattern, replacement) in ALIASES.iter().chain(REPLACEMENTS) {
        if result.contains(pattern) {
            result = result.replace(pattern, replacement);
        }
    }
    log::debug!(target: NORMALIZE, "{:?} normalized to {:?}", raw, result);
    result
}

/// Strip one pair of enclosing `$$...$$` or `$...$` math delimiters.
pub fn strip_math_delimiters(raw: &str) -> &str {
    let trimmed = raw.trim();
    let inner = if trimmed.len() >= 4 && trimmed.starts_with("$$") && trimmed.ends_with("$$") {
        &trimmed[2..trimmed.len() - 2]
    } else if trimmed.len() >= 2 && trimmed.starts_with('$') && trimmed.ends_with('$') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };
    inner.trim()
}
