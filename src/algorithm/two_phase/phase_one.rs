//! # Phase one: removing negative constants
//!
//! The initial tableau is feasible when every constraint row has a non-negative constant. If that
//! is not the case, pivots are made on rows with a negative constant until it is, or until it is
//! clear that no pivot can help.
use log::{debug, warn};

use crate::algorithm::two_phase::pivot_logged;
use crate::algorithm::two_phase::tableau::{FeasibilityPivot, Tableau};

/// Outcome of the first phase.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FeasibilityResult {
    /// All constraint rows have a non-negative constant.
    Feasible,
    /// A negative constant can't be removed.
    Infeasible,
    /// The tableau is still infeasible after the maximum number of pivots.
    IterationLimit,
}

/// Pivot until the tableau is feasible.
///
/// Each pivot is on the first unused row with a negative constant, in the unused column with the
/// most negative entry of that row.
///
/// # Arguments
///
/// * `tableau`: Tableau to make feasible; it keeps the state after the last pivot.
/// * `limit`: Maximum number of pivots.
///
/// # Return value
///
/// Whether the tableau is feasible now.
pub fn make_feasible(tableau: &mut Tableau, limit: usize) -> FeasibilityResult {
    let mut nr_pivots = 0;
    loop {
        if tableau.is_feasible() {
            debug!("Feasible after {} pivots", nr_pivots);
            break FeasibilityResult::Feasible;
        }

        match tableau.select_feasibility_pivot() {
            FeasibilityPivot::Entering(pivot) => {
                if nr_pivots == limit {
                    warn!("No feasible tableau after {} pivots", limit);
                    break FeasibilityResult::IterationLimit;
                }

                pivot_logged(tableau, pivot);
                nr_pivots += 1;
            },
            FeasibilityPivot::Infeasible { row } => {
                warn!("Row {} has a negative constant and no negative coefficients", tableau.row_label(row));
                break FeasibilityResult::Infeasible;
            },
            FeasibilityPivot::NoNegativeRow => {
                warn!("Only used rows have a negative constant");
                break FeasibilityResult::Infeasible;
            },
        }
    }
}
