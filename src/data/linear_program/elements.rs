//! # Building blocks to describe linear programs.
use std::fmt;

use crate::data::number_types::rational::Rational;

/// A `Constraint` is a type of (in)equality.
///
/// Read from the left-hand side to the right-hand side: `Less` is `<=`, `Greater` is `>=`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Objective {
    #[default]
    Maximize,
    Minimize,
}

impl Objective {
    /// Whether a coefficient of the objective row still allows the objective to improve.
    ///
    /// When maximizing, the objective row holds negated costs, so negative entries are improving.
    /// When minimizing, the costs are stored as they are and positive entries are improving.
    pub fn is_improving(self, objective_row_value: &Rational) -> bool {
        match self {
            Objective::Maximize => objective_row_value.is_negative(),
            Objective::Minimize => objective_row_value.is_positive(),
        }
    }
}
