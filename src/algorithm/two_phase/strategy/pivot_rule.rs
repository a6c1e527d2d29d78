//! # Pivot rules
//!
//! Strategies for choosing the entering column of a primal pivot.
use crate::algorithm::two_phase::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made by the
/// ratio test, independent of the strategy.
pub trait PivotRule {
    /// Create a new instance.
    fn new(tableau: &Tableau) -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// Only unused columns that are not the constant column may be selected, and only if the
    /// objective would improve by bringing them in.
    ///
    /// # Return value
    ///
    /// Index of the entering column, or `None` if no column improves the objective.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<usize>;
}

/// Simply pivot on the first column that allows the objective to improve.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new(_tableau: &Tableau) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<usize> {
        tableau.candidate_columns()
            .find(|&column| tableau.is_improving(column))
    }
}

/// Pivot on the column with the largest improvement per unit of the entering variable.
///
/// For maximization that is the most negative entry of the objective row, for minimization the
/// most positive one. The first such column is selected on ties.
pub struct SteepestDescentAlongVariable;
impl PivotRule for SteepestDescentAlongVariable {
    fn new(_tableau: &Tableau) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<usize> {
        let objective_row = tableau.objective_row();

        let mut best: Option<usize> = None;
        for column in tableau.candidate_columns().filter(|&column| tableau.is_improving(column)) {
            let value = &tableau[(objective_row, column)];
            let is_steeper = match best {
                // Improving entries share a sign, so larger magnitude is further from zero
                Some(current) => {
                    let current = &tableau[(objective_row, current)];
                    if value.is_negative() { value < current } else { value > current }
                },
                None => true,
            };
            if is_steeper {
                best = Some(column);
            }
        }

        best
    }
}
