use pretty_assertions::assert_eq;

use relp_tableau::algorithm::{Limits, OptimizationResult};
use relp_tableau::algorithm::two_phase::tableau::Label;
use relp_tableau::data::linear_program::elements::ConstraintType::{Equal, Greater, Less};
use relp_tableau::data::linear_program::elements::Objective::{Maximize, Minimize};
use relp_tableau::data::linear_program::general_form::GeneralForm;

use super::{constraint, solve, terms, value};

#[test]
fn two_constraints() {
    let solution = solve(Maximize, "2 3", vec![
        constraint("1 1", Less, "4"),
        constraint("1 3", Less, "6"),
    ]);

    assert_eq!(solution.objective_value(), &value("9"));
    assert_eq!(solution.variable("x1"), Some(&value("3")));
    assert_eq!(solution.variable("x2"), Some(&value("1")));
    assert_eq!(solution.to_string(), "x1 = 3\nx2 = 1\nObjective value = 9\n");
}

#[test]
fn three_constraints() {
    let solution = solve(Maximize, "3 5", vec![
        constraint("1 0", Less, "4"),
        constraint("0 2", Less, "12"),
        constraint("3 2", Less, "18"),
    ]);

    assert_eq!(solution.objective_value(), &value("36"));
    assert_eq!(solution.variable("x1"), Some(&value("2")));
    assert_eq!(solution.variable("x2"), Some(&value("6")));
    assert_eq!(solution.value(&Label::Slack(1)), Some(&value("2")));
}

#[test]
fn fractional_optimum() {
    let solution = solve(Maximize, "1 1", vec![
        constraint("2 1", Less, "4"),
        constraint("1 3", Less, "5"),
    ]);

    assert_eq!(solution.to_string(), "x1 = 7/5\nx2 = 6/5\nObjective value = 13/5\n");
}

#[test]
fn minimization() {
    let solution = solve(Minimize, "2 3", vec![
        constraint("1 1", Greater, "4"),
        constraint("1 3", Greater, "6"),
    ]);

    assert_eq!(solution.objective_value(), &value("9"));
    assert_eq!(solution.variable("x1"), Some(&value("3")));
    assert_eq!(solution.variable("x2"), Some(&value("1")));
}

#[test]
fn mixed_constraints() {
    let solution = solve(Maximize, "1 2", vec![
        constraint("1 1", Less, "4"),
        constraint("1 -1", Greater, "1"),
    ]);

    assert_eq!(solution.objective_value(), &value("11/2"));
    assert_eq!(solution.variable("x1"), Some(&value("5/2")));
    assert_eq!(solution.variable("x2"), Some(&value("3/2")));
}

#[test]
fn equality() {
    let solution = solve(Maximize, "1 1", vec![
        constraint("1 1", Equal, "3"),
        constraint("1 0", Less, "2"),
    ]);

    assert_eq!(solution.objective_value(), &value("3"));
    assert_eq!(solution.variable("x1"), Some(&value("2")));
    assert_eq!(solution.variable("x2"), Some(&value("1")));
}

#[test]
fn infeasible() {
    let general_form = GeneralForm::new(Maximize, terms("1 1"), vec![constraint("1 1", Less, "-5")]);

    assert_eq!(general_form.solve(&Limits::default()), Ok(OptimizationResult::Infeasible));
}

#[test]
fn unbounded() {
    let general_form = GeneralForm::new(Maximize, terms("1 0"), vec![constraint("-1 1", Less, "1")]);

    assert_eq!(general_form.solve(&Limits::default()), Ok(OptimizationResult::Unbounded));
}

#[test]
fn rendered_tableau() {
    let general_form = GeneralForm::new(Minimize, terms("2 3"), vec![
        constraint("1 1", Greater, "4"),
        constraint("1 3", Greater, "6"),
    ]);

    let expected = [
        "          -x1       -x2       const     \n",
        "s1        -1        -1        -4        \n",
        "s2        -1        -3        -6        \n",
        "F          2         3         0        \n",
    ].concat();
    assert_eq!(general_form.to_tableau().unwrap().to_string(), expected);
}
