//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm on a
//! dense tableau. When the initial tableau is not feasible, the first phase removes negative
//! constants; the second phase then improves the objective until no unused column can.
use log::{debug, info, trace, warn};

use crate::algorithm::{Limits, OptimizationResult};
use crate::algorithm::two_phase::phase_one::FeasibilityResult;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{Pivot, Tableau};

pub mod tableau;
pub mod strategy;
pub mod phase_one;
pub mod phase_two;


/// The two phases of the method, used to tell where an iteration limit was hit.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Removing negative constants.
    Feasibility,
    /// Improving the objective.
    Optimization,
}

/// Solve the linear program represented by a tableau.
///
/// # Arguments
///
/// * `tableau`: Initial tableau, as built from a `GeneralForm`.
/// * `limits`: Maximum number of pivots in each phase.
///
/// # Return value
///
/// The solution if there is an optimum, and otherwise the reason why there is none.
pub fn solve<PR: PivotRule>(mut tableau: Tableau, limits: &Limits) -> OptimizationResult {
    if !tableau.is_feasible() {
        info!("Phase one: the initial tableau has negative constants");
        match phase_one::make_feasible(&mut tableau, limits.feasibility_iterations) {
            FeasibilityResult::Feasible => info!("Phase one: feasible"),
            FeasibilityResult::Infeasible => {
                warn!("Phase one: the problem is infeasible");
                return OptimizationResult::Infeasible;
            },
            FeasibilityResult::IterationLimit => {
                return OptimizationResult::IterationLimit { phase: Phase::Feasibility, tableau };
            },
        }
    }

    info!("Phase two: optimizing");
    let result = phase_two::primal::<PR>(&mut tableau, limits.optimization_iterations);
    if let OptimizationResult::FiniteOptimum(solution) = &result {
        info!("Phase two: optimal with objective value {}", solution.objective_value());
    }

    result
}

/// Pivot, logging the variables that are exchanged.
fn pivot_logged(tableau: &mut Tableau, pivot: Pivot) {
    debug!(
        "Pivot on ({}, {}): {} enters, {} leaves",
        pivot.row, pivot.column, tableau.column_label(pivot.column), tableau.row_label(pivot.row),
    );
    tableau.pivot(pivot);
    trace!("\n{}", tableau);
}
