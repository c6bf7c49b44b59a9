//! Canonical boolean expressions
//!
//! After normalization and implication elimination a formula is plain text over
//! `!`, `&&`, `||`, parentheses, the constants `1`/`0` and single lowercase
//! letters. This module parses that text into a typed [`Formula`] tree and
//! evaluates it by structural recursion; variables are bound by position in a
//! [`VariableSet`], never by rewriting the text.
//!
//! # Quick Start
//!
//! ```
//! use latex_truth_table::{Formula, VariableSet};
//!
//! # fn main() -> Result<(), latex_truth_table::FormulaError> {
//! let formula = Formula::parse("p && !q")?;
//! let variables = formula.variables();
//! assert_eq!(variables.names(), &['p', 'q']);
//!
//! assert!(formula.evaluate(&variables, &[true, false])?);
//! assert!(!formula.evaluate(&variables, &[true, true])?);
//! # Ok(())
//! # }
//! ```

mod depth;
mod display;
pub mod error;
mod eval;
mod parser;
mod variables;

#[cfg(test)]
mod tests;

pub use depth::nesting_depth;
pub use error::FormulaError;
pub use eval::evaluate_expression;
pub use variables::VariableSet;

use std::collections::BTreeSet;

/// Node type for expression tree folding
///
/// Represents one node of a [`Formula`] with the folded results of its
/// children in place of the children themselves. See [`Formula::fold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<T> {
    /// A variable with the given name
    Variable(char),
    /// A constant boolean value
    Constant(bool),
    /// Logical NOT with the result from the inner subtree
    Not(T),
    /// Logical AND with results from left and right subtrees
    And(T, T),
    /// Logical OR with results from left and right subtrees
    Or(T, T),
}

/// A parsed canonical expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    /// A single-letter variable
    Variable(char),
    /// A constant value (`1` or `0`)
    Constant(bool),
    /// Logical NOT of an expression
    Not(Box<Formula>),
    /// Logical AND of two expressions
    And(Box<Formula>, Box<Formula>),
    /// Logical OR of two expressions
    Or(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Create a variable expression
    pub fn variable(name: char) -> Self {
        Formula::Variable(name)
    }

    /// Create a constant expression
    pub fn constant(value: bool) -> Self {
        Formula::Constant(value)
    }

    /// Logical AND of `self` and `other`
    pub fn and(self, other: Formula) -> Self {
        Formula::And(Box::new(self), Box::new(other))
    }

    /// Logical OR of `self` and `other`
    pub fn or(self, other: Formula) -> Self {
        Formula::Or(Box::new(self), Box::new(other))
    }

    /// Logical NOT of `self`
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Formula::Not(Box::new(self))
    }

    /// Fold the expression tree depth-first from leaves to root
    ///
    /// `f` is called once per node with an [`ExprNode`] holding the results
    /// already computed for the node's children.
    ///
    /// # Examples
    ///
    /// Count the operators in a formula:
    ///
    /// ```
    /// use latex_truth_table::{ExprNode, Formula};
    ///
    /// let formula = Formula::parse("!(p) || (q && r)").unwrap();
    /// let ops = formula.fold(|node| match node {
    ///     ExprNode::Variable(_) | ExprNode::Constant(_) => 0,
    ///     ExprNode::Not(inner) => inner + 1,
    ///     ExprNode::And(l, r) | ExprNode::Or(l, r) => l + r + 1,
    /// });
    /// assert_eq!(ops, 3);
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(ExprNode<T>) -> T + Copy,
    {
        self.fold_impl(&f)
    }

    fn fold_impl<T, F>(&self, f: &F) -> T
    where
        F: Fn(ExprNode<T>) -> T,
    {
        match self {
            Formula::Variable(name) => f(ExprNode::Variable(*name)),
            Formula::Constant(value) => f(ExprNode::Constant(*value)),
            Formula::Not(inner) => {
                let inner_result = inner.fold_impl(f);
                f(ExprNode::Not(inner_result))
            }
            Formula::And(left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::And(left_result, right_result))
            }
            Formula::Or(left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::Or(left_result, right_result))
            }
        }
    }

    /// The variables occurring in the tree, sorted
    pub fn variables(&self) -> VariableSet {
        self.fold(|node| match node {
            ExprNode::Variable(name) => BTreeSet::from([name]),
            ExprNode::Constant(_) => BTreeSet::new(),
            ExprNode::Not(inner) => inner,
            ExprNode::And(mut left, right) | ExprNode::Or(mut left, right) => {
                left.extend(right);
                left
            }
        })
        .into_iter()
        .collect()
    }
}
