//! The ordered set of variables of a formula

use std::collections::BTreeSet;
use std::fmt;

/// Distinct single-letter variable names in ascending order
///
/// The order fixes both the column order of a truth table and the bit order
/// of assignment enumeration: the first variable is the most significant bit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VariableSet {
    names: Vec<char>,
}

impl VariableSet {
    /// Collect every lowercase ASCII letter of `expr`, deduplicated and sorted
    ///
    /// This is a plain character scan: a stray lowercase word left behind by
    /// incomplete normalization contributes each of its letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use latex_truth_table::VariableSet;
    ///
    /// let vars = VariableSet::extract("(!(q) || (p)) && q");
    /// assert_eq!(vars.names(), &['p', 'q']);
    /// ```
    pub fn extract(expr: &str) -> Self {
        expr.chars().filter(char::is_ascii_lowercase).collect()
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the formula is constant
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Variable names in column order
    pub fn names(&self) -> &[char] {
        &self.names
    }

    /// Iterate over variable names in column order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.names.iter().copied()
    }

    /// Column index of `name`, if it is part of the set
    pub fn position(&self, name: char) -> Option<usize> {
        self.names.binary_search(&name).ok()
    }

    /// Whether `name` is part of the set
    pub fn contains(&self, name: char) -> bool {
        self.position(name).is_some()
    }
}

impl FromIterator<char> for VariableSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let unique: BTreeSet<char> = iter.into_iter().collect();
        VariableSet {
            names: unique.into_iter().collect(),
        }
    }
}

impl fmt::Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", name)?;
        }
        write!(f, "]")
    }
}
