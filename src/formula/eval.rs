//! Evaluation of formulas under an assignment

use super::error::FormulaError;
use super::{ExprNode, Formula, VariableSet};

impl Formula {
    /// Evaluate the formula with `values[i]` bound to the `i`-th variable of
    /// `variables`
    ///
    /// Fails with [`FormulaError::UnboundVariable`] when the formula mentions a
    /// variable that has no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use latex_truth_table::{Formula, VariableSet};
    ///
    /// let formula = Formula::parse("!(p) || (q)").unwrap();
    /// let vars = VariableSet::extract("pq");
    ///
    /// assert_eq!(formula.evaluate(&vars, &[true, false]), Ok(false));
    /// assert_eq!(formula.evaluate(&vars, &[false, false]), Ok(true));
    /// ```
    pub fn evaluate(
        &self,
        variables: &VariableSet,
        values: &[bool],
    ) -> Result<bool, FormulaError> {
        self.fold(|node: ExprNode<Result<bool, FormulaError>>| match node {
            ExprNode::Variable(name) => variables
                .position(name)
                .and_then(|index| values.get(index).copied())
                .ok_or(FormulaError::UnboundVariable { name }),
            ExprNode::Constant(value) => Ok(value),
            ExprNode::Not(inner) => Ok(!inner?),
            ExprNode::And(left, right) => Ok(left? && right?),
            ExprNode::Or(left, right) => Ok(left? || right?),
        })
    }
}

/// Parse a canonical expression and evaluate it under one assignment
///
/// Convenience for one-off evaluation; to evaluate many assignments parse once
/// with [`Formula::parse`] and call [`Formula::evaluate`].
pub fn evaluate_expression(
    expr: &str,
    variables: &VariableSet,
    values: &[bool],
) -> Result<bool, FormulaError> {
    Formula::parse(expr)?.evaluate(variables, values)
}
