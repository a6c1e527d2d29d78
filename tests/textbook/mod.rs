//! # Small textbook problems
//!
//! Problems that are small enough to be checked by hand.
use relp_tableau::algorithm::{Limits, OptimizationResult};
use relp_tableau::data::linear_program::elements::{ConstraintType, Objective};
use relp_tableau::data::linear_program::general_form::{Constraint, GeneralForm, Term};
use relp_tableau::data::linear_program::solution::Solution;
use relp_tableau::data::number_types::rational::Rational;
use relp_tableau::io::read_rationals;

/// # Problems and their solutions
#[allow(missing_docs)]
mod test;

/// Build a constraint from its coefficients, as text, for the variables `x1`, `x2`, ... .
///
/// # Arguments
///
/// * `coefficients`: Whitespace-separated rationals, one per variable.
/// * `relation`: Type of the constraint.
/// * `rhs`: Right-hand side as text.
fn constraint(coefficients: &str, relation: ConstraintType, rhs: &str) -> Constraint {
    Constraint::new(terms(coefficients), relation, rhs.parse().unwrap())
}

/// Terms `c1 x1 + c2 x2 + ...` out of a text of coefficients.
fn terms(coefficients: &str) -> Vec<Term> {
    read_rationals(coefficients).unwrap()
        .into_iter()
        .enumerate()
        .map(|(j, coefficient)| Term::new(coefficient, format!("x{}", j + 1)))
        .collect()
}

/// Solve with the default limits, panicking unless there is an optimum.
fn solve(objective: Objective, coefficients: &str, constraints: Vec<Constraint>) -> Solution {
    let general_form = GeneralForm::new(objective, terms(coefficients), constraints);

    match general_form.solve(&Limits::default()) {
        Ok(OptimizationResult::FiniteOptimum(solution)) => solution,
        other => panic!("expected an optimum, got {:?}", other),
    }
}

fn value(text: &str) -> Rational {
    text.parse().unwrap()
}
