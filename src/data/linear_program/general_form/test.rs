use crate::algorithm::{Limits, OptimizationResult};
use crate::algorithm::two_phase::tableau::{Label, Tableau};
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::general_form::{Constraint, GeneralForm, Term};
use crate::data::number_types::rational::Rational;
use crate::R;
use crate::tests::problem_1;

#[test]
fn variables() {
    let general_form = GeneralForm::new(
        Objective::Maximize,
        vec![Term::new(R!(1), "y"), Term::constant(R!(5))],
        vec![
            Constraint::new(vec![Term::new(R!(1), "x2"), Term::new(R!(1), "y")], ConstraintType::Less, R!(1)),
            Constraint::new(vec![Term::new(R!(1), "x1")], ConstraintType::Equal, R!(1)),
        ],
    );

    assert_eq!(general_form.variables(), vec!["x1", "x2", "y"]);
    assert_eq!(general_form.nr_constraints(), 2);
}

#[test]
fn to_tableau() {
    let tableau = problem_1::general_form().to_tableau();

    assert_eq!(tableau, Ok(problem_1::tableau_form()));
}

#[test]
fn greater_and_constants() {
    // min x1 - 2y + 3 s.t. 2x1 + 1 >= y + 4, x1 + x1 + y = 7
    let general_form = GeneralForm::new(
        Objective::Minimize,
        vec![Term::new(R!(1), "x1"), Term::new(R!(-2), "y"), Term::constant(R!(3))],
        vec![
            Constraint::new(
                vec![Term::new(R!(2), "x1"), Term::constant(R!(1)), Term::new(R!(-1), "y")],
                ConstraintType::Greater,
                R!(4),
            ),
            Constraint::new(
                vec![Term::new(R!(1), "x1"), Term::new(R!(1), "x1"), Term::new(R!(1), "y")],
                ConstraintType::Equal,
                R!(7),
            ),
        ],
    );

    let mut expected = Tableau::from_values(vec![
        vec![R!(-2), R!(1), R!(-3)],
        vec![R!(2), R!(1), R!(7)],
        vec![R!(1), R!(-2), R!(-3)],
    ]);
    expected.set_objective(Objective::Minimize);
    expected.set_column_label(1, Label::Decision("y".to_string()));

    assert_eq!(general_form.to_tableau(), Ok(expected));
}

#[test]
fn objective_constant_when_maximizing() {
    let general_form = GeneralForm::new(
        Objective::Maximize,
        vec![Term::new(R!(1), "x1"), Term::constant(R!(-1, 2))],
        vec![Constraint::new(vec![Term::new(R!(1), "x1")], ConstraintType::Less, R!(2))],
    );

    let tableau = general_form.to_tableau().unwrap();
    assert_eq!(tableau[(1, 0)], R!(-1));
    assert_eq!(tableau.objective_function_value(), &R!(-1, 2));

    let result = general_form.solve(&Limits::default()).unwrap();
    assert_eq!(result.solution().unwrap().objective_value(), &R!(3, 2));
}

#[test]
fn inconsistent() {
    let undefined = GeneralForm::new(
        Objective::Maximize,
        vec![Term::new(Rational::UNDEFINED, "x1")],
        vec![],
    );
    assert!(undefined.to_tableau().is_err());

    let empty_name = GeneralForm::new(
        Objective::Maximize,
        vec![Term::new(R!(1), "")],
        vec![],
    );
    assert!(empty_name.to_tableau().is_err());

    let undefined_rhs = GeneralForm::new(
        Objective::Maximize,
        vec![Term::new(R!(1), "x1")],
        vec![Constraint::new(vec![Term::new(R!(1), "x1")], ConstraintType::Less, Rational::UNDEFINED)],
    );
    assert_eq!(
        undefined_rhs.solve(&Limits::default()).unwrap_err().to_string(),
        "InconsistencyError: Undefined right-hand side in constraint 1",
    );
}

#[test]
fn solve() {
    let result = problem_1::general_form().solve(&Limits::default());

    match result {
        Ok(OptimizationResult::FiniteOptimum(solution)) => {
            assert_eq!(solution.objective_value(), &R!(9));
            assert_eq!(solution.variable("x1"), Some(&R!(3)));
            assert_eq!(solution.variable("x2"), Some(&R!(1)));
        },
        other => panic!("expected an optimum, got {:?}", other),
    }
}
