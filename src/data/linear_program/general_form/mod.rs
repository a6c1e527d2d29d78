//! # Linear programs in "general form"
//!
//! A linear program as it is written down: an objective and constraints, each a sum of terms. The
//! terms are structured already; reading them from text is up to the caller.
//!
//! Converting to a tableau fixes the column order (variables sorted by name) and the sign
//! conventions of the simplex method.
use itertools::Itertools;
use num_traits::Zero;

use crate::algorithm::{Limits, OptimizationResult};
use crate::algorithm::two_phase;
use crate::algorithm::two_phase::strategy::pivot_rule::SteepestDescentAlongVariable;
use crate::algorithm::two_phase::tableau::{Label, Tableau};
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::number_types::rational::Rational;
use crate::io::error::InconsistencyError;

#[cfg(test)]
mod test;

/// A coefficient times a variable, or a constant when there is no variable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Term {
    /// Factor of the variable, or the value of the constant.
    pub coefficient: Rational,
    /// Name of the variable, like `"x1"`.
    pub variable: Option<String>,
}

impl Term {
    /// A coefficient times a variable.
    pub fn new(coefficient: Rational, variable: impl Into<String>) -> Self {
        Self { coefficient, variable: Some(variable.into()) }
    }

    /// A term without a variable.
    pub fn constant(value: Rational) -> Self {
        Self { coefficient: value, variable: None }
    }
}

/// A sum of terms related to a right-hand side.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint {
    /// Left-hand side.
    pub terms: Vec<Term>,
    /// How the left-hand side relates to the right-hand side.
    pub relation: ConstraintType,
    /// Right-hand side.
    pub rhs: Rational,
}

impl Constraint {
    /// Create a new constraint.
    pub fn new(terms: Vec<Term>, relation: ConstraintType, rhs: Rational) -> Self {
        Self { terms, relation, rhs }
    }
}

/// A linear program in general form.
///
/// All variables are implicitly non-negative.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneralForm {
    objective: Objective,
    objective_terms: Vec<Term>,
    constraints: Vec<Constraint>,
}

impl GeneralForm {
    /// Create a new linear program in general form.
    ///
    /// # Arguments
    ///
    /// * `objective`: Whether to maximize or minimize.
    /// * `objective_terms`: Terms of the objective function, possibly including a constant.
    /// * `constraints`: Every constraint becomes a row of the tableau, in this order.
    pub fn new(objective: Objective, objective_terms: Vec<Term>, constraints: Vec<Constraint>) -> Self {
        Self { objective, objective_terms, constraints }
    }

    /// Whether the objective is maximized or minimized.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Number of constraints, which is the number of rows of the tableau minus one.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    fn terms(&self) -> impl Iterator<Item = &Term> {
        self.objective_terms.iter()
            .chain(self.constraints.iter().flat_map(|constraint| &constraint.terms))
    }

    /// Names of all variables, sorted and without duplicates.
    ///
    /// This order is the column order of the tableau.
    pub fn variables(&self) -> Vec<&str> {
        self.terms()
            .filter_map(|term| term.variable.as_deref())
            .sorted()
            .dedup()
            .collect()
    }

    /// Check that every value is defined and every variable has a name.
    fn check_consistency(&self) -> Result<(), InconsistencyError> {
        for term in self.terms() {
            if term.coefficient.is_undefined() {
                return Err(InconsistencyError::new(match &term.variable {
                    Some(name) => format!("Undefined coefficient for variable \"{}\"", name),
                    None => "Undefined constant".to_string(),
                }));
            }
            if term.variable.as_deref().is_some_and(str::is_empty) {
                return Err(InconsistencyError::new("Empty variable name"));
            }
        }

        match self.constraints.iter().position(|constraint| constraint.rhs.is_undefined()) {
            Some(i) => Err(InconsistencyError::new(format!("Undefined right-hand side in constraint {}", i + 1))),
            None => Ok(()),
        }
    }

    /// Build the initial tableau.
    ///
    /// Each constraint is a row, in the order given, labeled with its slack `s1`, `s2`, ... .
    /// Coefficients of the same variable within a constraint are summed and constants on the
    /// left-hand side are moved to the right-hand side. A `>=` constraint is multiplied by -1
    /// entirely.
    ///
    /// The objective row holds the negated coefficients when maximizing and the coefficients as
    /// they are when minimizing. An objective constant is stored with the opposite sign
    /// convention, such that the constant column of the objective row holds the objective value.
    ///
    /// # Errors
    ///
    /// If a value is undefined or a variable has an empty name.
    pub fn to_tableau(&self) -> Result<Tableau, InconsistencyError> {
        self.check_consistency()?;

        let variables = self.variables();
        let mut tableau = Tableau::new(self.constraints.len() + 1, variables.len() + 1);
        tableau.set_objective(self.objective);
        for (j, &name) in variables.iter().enumerate() {
            tableau.set_column_label(j, Label::Decision(name.to_string()));
        }

        let constant_column = tableau.constant_column();
        // Every name was collected in `variables`
        let column_of = |name: &str| variables.binary_search(&name).unwrap_or_else(|_| unreachable!());

        for (i, constraint) in self.constraints.iter().enumerate() {
            let mut rhs = constraint.rhs;
            for term in &constraint.terms {
                match &term.variable {
                    Some(name) => tableau[(i, column_of(name.as_str()))] += term.coefficient,
                    None => rhs -= term.coefficient,
                }
            }
            tableau[(i, constant_column)] = rhs;

            if constraint.relation == ConstraintType::Greater {
                for j in 0..tableau.nr_columns() {
                    tableau[(i, j)] = -tableau[(i, j)];
                }
            }
        }

        let objective_row = tableau.objective_row();
        let mut constant = Rational::zero();
        for term in &self.objective_terms {
            let value = match self.objective {
                Objective::Maximize => -term.coefficient,
                Objective::Minimize => term.coefficient,
            };
            match &term.variable {
                Some(name) => tableau[(objective_row, column_of(name.as_str()))] += value,
                None => constant -= value,
            }
        }
        tableau[(objective_row, constant_column)] = constant;

        Ok(tableau)
    }

    /// Solve with the default pivot rule.
    ///
    /// # Errors
    ///
    /// If no tableau can be built, see `GeneralForm::to_tableau`.
    pub fn solve(&self, limits: &Limits) -> Result<OptimizationResult, InconsistencyError> {
        let tableau = self.to_tableau()?;

        Ok(two_phase::solve::<SteepestDescentAlongVariable>(tableau, limits))
    }
}
