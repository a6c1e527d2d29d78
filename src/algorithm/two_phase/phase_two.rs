//! # Phase two: improving the objective
use log::{debug, warn};

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::{Phase, pivot_logged};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{PrimalPivot, Tableau};

/// Improves the objective of a feasible tableau until it is optimal.
///
/// While calling this method, all constraint rows should have a non-negative constant.
///
/// The search stops with an optimum as soon as no unused column can improve the objective, even
/// if a used column still could.
///
/// # Arguments
///
/// * `tableau`: Feasible tableau; it keeps the state after the last pivot.
/// * `limit`: Maximum number of pivots.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub fn primal<PR: PivotRule>(tableau: &mut Tableau, limit: usize) -> OptimizationResult {
    debug_assert!(tableau.is_feasible());

    let mut rule = PR::new(tableau);
    let mut nr_pivots = 0;
    loop {
        if tableau.is_optimal() {
            debug!("Optimal after {} pivots", nr_pivots);
            break OptimizationResult::FiniteOptimum(tableau.solution());
        }

        match tableau.select_pivot_with(&mut rule) {
            PrimalPivot::Entering(pivot) => {
                if nr_pivots == limit {
                    warn!("No optimal tableau after {} pivots", limit);
                    break OptimizationResult::IterationLimit {
                        phase: Phase::Optimization,
                        tableau: tableau.clone(),
                    };
                }

                pivot_logged(tableau, pivot);
                nr_pivots += 1;
            },
            PrimalPivot::Optimal => {
                debug!("No unused column improves the objective after {} pivots", nr_pivots);
                break OptimizationResult::FiniteOptimum(tableau.solution());
            },
            PrimalPivot::Unbounded { column } => {
                warn!("Unbounded: no constraint limits {}", tableau.column_label(column));
                break OptimizationResult::Unbounded;
            },
        }
    }
}
