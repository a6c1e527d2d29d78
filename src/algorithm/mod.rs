//! # Algorithms
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::solution::Solution;

pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm. When the algorithm gives up before it could
/// decide, the tableau it was working on is returned instead.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum OptimizationResult {
    /// An optimal basic solution.
    FiniteOptimum(Solution),
    /// No solution satisfies all constraints.
    Infeasible,
    /// The objective can be improved without limit.
    Unbounded,
    /// The maximum number of pivots was reached.
    IterationLimit {
        /// Phase that was running when the limit was hit.
        phase: Phase,
        /// State after the last pivot.
        tableau: Tableau,
    },
}

impl OptimizationResult {
    /// The solution, if an optimum was found.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            OptimizationResult::FiniteOptimum(solution) => Some(solution),
            _ => None,
        }
    }

    /// The tableau the algorithm left behind, if it stopped because of an iteration limit.
    pub fn final_tableau(&self) -> Option<&Tableau> {
        match self {
            OptimizationResult::IterationLimit { tableau, .. } => Some(tableau),
            _ => None,
        }
    }
}

/// Maximum number of pivots per phase.
///
/// The simplex method as implemented here has no anti-cycling rule; these caps guarantee
/// termination.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Limits {
    /// Pivots allowed while removing negative constants.
    pub feasibility_iterations: usize,
    /// Pivots allowed while improving the objective.
    pub optimization_iterations: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            feasibility_iterations: 20,
            optimization_iterations: 100,
        }
    }
}
