//! # Representation of solutions
//!
//! Once a linear program is fully solved, a solution is derived from the final tableau. It holds
//! the value of every variable that labels a row or column of that tableau, slacks included.
use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;

use crate::algorithm::two_phase::tableau::Label;
use crate::data::number_types::rational::Rational;

/// A basic solution to a linear program.
///
/// The objective value is in terms of the problem as it was stated: for minimization problems it is
/// not the negated value that the tableau holds.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Solution {
    /// Value of the objective function for this solution, including any constant that was included
    /// in the original problem.
    objective_value: Rational,
    /// Values of the slack and decision variables.
    values: BTreeMap<Label, Rational>,
}

impl Solution {
    /// Create a new solution without any variable values.
    ///
    /// # Arguments
    ///
    /// * `objective_value`: Sign corrected value of the objective function.
    pub fn new(objective_value: Rational) -> Self {
        Self {
            objective_value,
            values: BTreeMap::new(),
        }
    }

    /// Set the value of a variable, replacing any value it had.
    pub fn set(&mut self, label: Label, value: Rational) {
        debug_assert!(label.is_variable());

        self.values.insert(label, value);
    }

    /// Value of the objective function, in terms of the problem as it was stated.
    pub fn objective_value(&self) -> &Rational {
        &self.objective_value
    }

    /// Value of a slack or decision variable.
    pub fn value(&self, label: &Label) -> Option<&Rational> {
        self.values.get(label)
    }

    /// Value of a decision variable by its name, like `"x1"`.
    pub fn variable(&self, name: &str) -> Option<&Rational> {
        self.values.get(&Label::Decision(name.to_string()))
    }

    /// Names and values of the decision variables, ordered by name.
    pub fn decision_variables(&self) -> impl Iterator<Item = (&str, &Rational)> {
        self.values.iter()
            .filter_map(|(label, value)| label.decision_variable().map(|name| (name, value)))
    }
}

/// One `name = value` line per decision variable, followed by the objective value.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.decision_variables()
            .map(|(name, value)| format!("{} = {}", name, value))
            .join("\n");
        if !lines.is_empty() {
            writeln!(f, "{}", lines)?;
        }

        writeln!(f, "Objective value = {}", self.objective_value)
    }
}
