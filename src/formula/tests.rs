//! Tests for the formula module

use super::*;
use crate::assignment::Assignments;

fn truth_values(formula: &Formula, variables: &VariableSet) -> Vec<bool> {
    Assignments::new(variables.len())
        .map(|values| formula.evaluate(variables, &values).unwrap())
        .collect()
}

// ========== Parsing ==========

#[test]
fn test_parse_atoms() {
    assert_eq!(Formula::parse("p").unwrap(), Formula::variable('p'));
    assert_eq!(Formula::parse("1").unwrap(), Formula::constant(true));
    assert_eq!(Formula::parse("0").unwrap(), Formula::constant(false));
    assert_eq!(Formula::parse("((p))").unwrap(), Formula::variable('p'));
}

#[test]
fn test_not_binds_tighter_than_and() {
    let parsed = Formula::parse("!p && q").unwrap();
    let expected = Formula::variable('p').not().and(Formula::variable('q'));
    assert_eq!(parsed, expected);
}

#[test]
fn test_and_binds_tighter_than_or() {
    let parsed = Formula::parse("p || q && r").unwrap();
    let expected =
        Formula::variable('p').or(Formula::variable('q').and(Formula::variable('r')));
    assert_eq!(parsed, expected);
}

#[test]
fn test_parentheses_override_precedence() {
    let parsed = Formula::parse("(p || q) && r").unwrap();
    let expected =
        Formula::variable('p').or(Formula::variable('q')).and(Formula::variable('r'));
    assert_eq!(parsed, expected);
}

#[test]
fn test_operators_associate_left() {
    let parsed = Formula::parse("p && q && r").unwrap();
    let expected = Formula::variable('p')
        .and(Formula::variable('q'))
        .and(Formula::variable('r'));
    assert_eq!(parsed, expected);
}

#[test]
fn test_whitespace_is_ignored() {
    assert_eq!(
        Formula::parse("  !( p )||q ").unwrap(),
        Formula::parse("!(p) || q").unwrap()
    );
}

// ========== Malformed input ==========

#[test]
fn test_unbalanced_parentheses() {
    assert!(matches!(
        Formula::parse("(p && q"),
        Err(FormulaError::InvalidSyntax { .. })
    ));
    assert!(matches!(
        Formula::parse("p && q)"),
        Err(FormulaError::InvalidSyntax { .. })
    ));
}

#[test]
fn test_leftover_latex_is_rejected() {
    match Formula::parse(r"p \to q") {
        Err(FormulaError::InvalidSyntax {
            position, input, ..
        }) => {
            assert_eq!(position, Some(2));
            assert_eq!(input.as_ref(), r"p \to q");
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn test_words_are_rejected() {
    assert!(Formula::parse("pq").is_err());
    assert!(Formula::parse("10").is_err());
    assert!(Formula::parse("P").is_err());
}

#[test]
fn test_single_ampersand_is_rejected() {
    assert!(Formula::parse("p & q").is_err());
    assert!(Formula::parse("p | q").is_err());
}

#[test]
fn test_empty_input() {
    match Formula::parse("") {
        Err(FormulaError::InvalidSyntax { position, .. }) => assert_eq!(position, Some(0)),
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

// ========== Evaluation ==========

#[test]
fn test_evaluate_implication_form() {
    let formula = Formula::parse("(!(p) || (q))").unwrap();
    let vars = formula.variables();
    assert_eq!(truth_values(&formula, &vars), vec![true, true, false, true]);
}

#[test]
fn test_evaluate_constants() {
    let formula = Formula::parse("1 && 0").unwrap();
    let vars = formula.variables();
    assert!(vars.is_empty());
    assert_eq!(formula.evaluate(&vars, &[]), Ok(false));
    assert_eq!(Formula::parse("!0").unwrap().evaluate(&vars, &[]), Ok(true));
}

#[test]
fn test_evaluate_unbound_variable() {
    let formula = Formula::parse("p && q").unwrap();
    let only_p = VariableSet::extract("p");
    assert_eq!(
        formula.evaluate(&only_p, &[true]),
        Err(FormulaError::UnboundVariable { name: 'q' })
    );
}

#[test]
fn test_evaluate_short_assignment() {
    let formula = Formula::parse("p && q").unwrap();
    let vars = formula.variables();
    assert_eq!(
        formula.evaluate(&vars, &[true]),
        Err(FormulaError::UnboundVariable { name: 'q' })
    );
}

#[test]
fn test_evaluate_is_deterministic() {
    let formula = Formula::parse("(p || !q) && (q || r)").unwrap();
    let vars = formula.variables();
    assert_eq!(truth_values(&formula, &vars), truth_values(&formula, &vars));
}

#[test]
fn test_evaluate_expression_helper() {
    let vars = VariableSet::extract("pq");
    assert_eq!(evaluate_expression("p && !q", &vars, &[true, false]), Ok(true));
    assert_eq!(evaluate_expression("p && !q", &vars, &[true, true]), Ok(false));
    assert!(evaluate_expression("p &&", &vars, &[true, true]).is_err());
}

// ========== Variables ==========

#[test]
fn test_variables_from_tree_match_text_scan() {
    let text = "(!((!(p) || (q))) || (r))";
    let formula = Formula::parse(text).unwrap();
    assert_eq!(formula.variables(), VariableSet::extract(text));
}

// ========== Display ==========

#[test]
fn test_display_minimal_parentheses() {
    let cases = [
        ("p && q || r", "p && q || r"),
        ("(p || q) && r", "(p || q) && r"),
        ("!(p && q)", "!(p && q)"),
        ("!(p || q)", "!(p || q)"),
        ("!!p", "!!p"),
        ("(!(p) || (q))", "!p || q"),
        ("1 && !0", "1 && !0"),
    ];
    for (input, expected) in cases {
        assert_eq!(Formula::parse(input).unwrap().to_string(), expected);
    }
}

#[test]
fn test_display_round_trip_preserves_truth_table() {
    for input in [
        "(!(((!(p) || (q)))) || (r))",
        "((!(p) || (q))) && ((!(q) || (r)))",
        "p && ((!(q) || (r))) || s",
        "!(p || q) && !(q && r)",
    ] {
        let formula = Formula::parse(input).unwrap();
        let reparsed = Formula::parse(&formula.to_string()).unwrap();
        let vars = formula.variables();
        assert_eq!(
            truth_values(&formula, &vars),
            truth_values(&reparsed, &vars),
            "{} vs {}",
            input,
            formula
        );
    }
}
