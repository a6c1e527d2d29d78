//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! The tableau is dense: every row is a basic variable (the last row is the objective function),
//! every column a non-basic variable (the last column holds the constants). A row or column that
//! was used as a pivot axis is marked and excluded from all later searches; rows and columns are
//! never removed, such that positions and labels stay stable.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::mem;
use std::ops::{Index, IndexMut, Range};

use num_traits::{Inv, Zero};

use crate::algorithm::two_phase::strategy::pivot_rule::{PivotRule, SteepestDescentAlongVariable};
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::rational::Rational;

pub use label::Label;

mod label;

/// Width of a single column when a tableau is rendered as text.
const COLUMN_WIDTH: usize = 10;

/// The simplex tableau: a grid of exact values with labels for each row and column.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Tableau {
    /// Row major, `nr_rows` rows of `nr_columns` values each.
    values: Vec<Vec<Rational>>,

    /// Rows that have been a pivot row.
    used_rows: Vec<bool>,
    /// Columns that have been a pivot column.
    used_columns: Vec<bool>,

    /// Basic variable of each row, the last one is `Label::Objective`.
    row_labels: Vec<Label>,
    /// Non-basic variable of each column, the last one is `Label::Constant`.
    column_labels: Vec<Label>,

    /// Fixes the sign convention of the objective row.
    objective: Objective,
}

/// Coordinates of a pivot element.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Pivot {
    pub row: usize,
    pub column: usize,
}

/// Outcome of a search for a pivot that improves the objective.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PrimalPivot {
    /// Pivot on this element to improve the objective.
    Entering(Pivot),
    /// No unused column can improve the objective.
    Optimal,
    /// The objective improves along this column without any constraint limiting it.
    Unbounded {
        /// Entering column that has no limiting row.
        column: usize,
    },
}

/// Outcome of a search for a pivot that removes a negative constant.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FeasibilityPivot {
    /// Pivot on this element.
    Entering(Pivot),
    /// No unused constraint row has a negative constant.
    NoNegativeRow,
    /// This row has a negative constant, but no negative coefficient to pivot on.
    Infeasible {
        /// Row with the negative constant.
        row: usize,
    },
}

impl Tableau {
    /// Create a tableau filled with zeros.
    ///
    /// Rows are labeled `s1`, `s2`, ..., `F` and columns `-x1`, `-x2`, ..., `const`. The objective
    /// is maximized.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of constraints plus one for the objective function.
    /// * `nr_columns`: Number of variables plus one for the constants.
    ///
    /// # Panics
    ///
    /// If either dimension is zero.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        assert!(nr_rows > 0, "a tableau needs at least the objective row");
        assert!(nr_columns > 0, "a tableau needs at least the constant column");

        let row_labels = (1..nr_rows)
            .map(Label::Slack)
            .chain([Label::Objective])
            .collect();
        let column_labels = (1..nr_columns)
            .map(|j| Label::Decision(format!("x{}", j)))
            .chain([Label::Constant])
            .collect();

        Self {
            values: vec![vec![Rational::zero(); nr_columns]; nr_rows],
            used_rows: vec![false; nr_rows],
            used_columns: vec![false; nr_columns],
            row_labels,
            column_labels,
            objective: Objective::Maximize,
        }
    }

    /// Create a tableau with default labels out of rows of values.
    ///
    /// # Panics
    ///
    /// If there are no rows, or the rows are empty or of different lengths.
    pub fn from_values(values: Vec<Vec<Rational>>) -> Self {
        let nr_columns = values.first().map_or(0, Vec::len);
        assert!(values.iter().all(|row| row.len() == nr_columns), "rows differ in length");

        let mut tableau = Self::new(values.len(), nr_columns);
        tableau.values = values;
        tableau
    }

    /// Number of rows, the objective row included.
    pub fn nr_rows(&self) -> usize {
        self.values.len()
    }

    /// Number of columns, the constant column included.
    pub fn nr_columns(&self) -> usize {
        self.used_columns.len()
    }

    /// Index of the objective function row, the last row.
    pub fn objective_row(&self) -> usize {
        self.nr_rows() - 1
    }

    /// Index of the column of constants, the last column.
    pub fn constant_column(&self) -> usize {
        self.nr_columns() - 1
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Set the direction of optimization.
    ///
    /// This only changes how the objective row is read; the values are not touched.
    pub fn set_objective(&mut self, objective: Objective) {
        self.objective = objective;
    }

    /// Basic variable of row `i`.
    pub fn row_label(&self, i: usize) -> &Label {
        &self.row_labels[i]
    }

    /// Non-basic variable of column `j`.
    pub fn column_label(&self, j: usize) -> &Label {
        &self.column_labels[j]
    }

    /// Rename row `i`.
    pub fn set_row_label(&mut self, i: usize, label: Label) {
        self.row_labels[i] = label;
    }

    /// Rename column `j`.
    pub fn set_column_label(&mut self, j: usize, label: Label) {
        self.column_labels[j] = label;
    }

    /// Whether row `i` has been used as a pivot row.
    pub fn is_row_used(&self, i: usize) -> bool {
        self.used_rows[i]
    }

    /// Whether column `j` has been used as a pivot column.
    pub fn is_column_used(&self, j: usize) -> bool {
        self.used_columns[j]
    }

    /// Value in the constant column of row `i`.
    pub fn constant(&self, i: usize) -> &Rational {
        &self.values[i][self.constant_column()]
    }

    /// Value in the constant column of the objective row.
    ///
    /// For minimization problems this is the negated objective value, see `Tableau::solution`.
    pub fn objective_function_value(&self) -> &Rational {
        self.constant(self.objective_row())
    }

    fn constraint_rows(&self) -> Range<usize> {
        0..self.objective_row()
    }

    /// All columns that may still enter: not used before and not the constant column.
    pub fn candidate_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.constant_column()).filter(move |&j| !self.used_columns[j])
    }

    /// Whether the objective row entry of a column allows the objective to improve.
    pub fn is_improving(&self, j: usize) -> bool {
        self.objective.is_improving(&self[(self.objective_row(), j)])
    }

    /// Select a pivot with the default rule: the most improving column.
    ///
    /// For maximization that is the most negative entry in the objective row, for minimization the
    /// most positive one. Ties are broken by the first occurrence.
    pub fn select_pivot(&self) -> PrimalPivot {
        self.select_pivot_with(&mut SteepestDescentAlongVariable)
    }

    /// Select a pivot using a specific rule to choose the entering column.
    ///
    /// # Arguments
    ///
    /// * `rule`: Decides on the entering column.
    ///
    /// # Return value
    ///
    /// A pivot, or the reason why there is none.
    pub fn select_pivot_with<PR: PivotRule>(&self, rule: &mut PR) -> PrimalPivot {
        match rule.select_primal_pivot_column(self) {
            Some(column) => match self.select_primal_pivot_row(column) {
                Some(row) => PrimalPivot::Entering(Pivot { row, column }),
                None => PrimalPivot::Unbounded { column },
            },
            None => PrimalPivot::Optimal,
        }
    }

    /// Ratio test to find the leaving row.
    ///
    /// Among the unused constraint rows with a strictly positive entry in the pivot column, select
    /// the row with the smallest non-negative ratio of constant and entry. Ties are broken by the
    /// first occurrence.
    ///
    /// # Arguments
    ///
    /// * `column`: Entering column.
    ///
    /// # Return value
    ///
    /// Row index of the pivot, or `None` if no row limits the entering column.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.constant_column());

        self.constraint_rows()
            .filter(|&i| !self.used_rows[i] && self[(i, column)].is_positive())
            .map(|i| (i, self.constant(i) / &self[(i, column)]))
            .filter(|(_, ratio)| !ratio.is_negative())
            .min_by(|(_, ratio_a), (_, ratio_b)| ratio_a.cmp(ratio_b))
            .map(|(i, _)| i)
    }

    /// Select a pivot that works towards removing negative constants.
    ///
    /// The row is the first unused constraint row with a negative constant, the column is the
    /// unused column with the most negative entry in that row (first on ties).
    pub fn select_feasibility_pivot(&self) -> FeasibilityPivot {
        let row = match self.constraint_rows()
            .find(|&i| !self.used_rows[i] && self.constant(i).is_negative()) {
            Some(row) => row,
            None => return FeasibilityPivot::NoNegativeRow,
        };

        let column = self.candidate_columns()
            .filter(|&j| self[(row, j)].is_negative())
            .min_by(|&a, &b| self[(row, a)].cmp(&self[(row, b)]));

        match column {
            Some(column) => FeasibilityPivot::Entering(Pivot { row, column }),
            None => FeasibilityPivot::Infeasible { row },
        }
    }

    /// Exchange the basic variable of a row with the non-basic variable of a column.
    ///
    /// Every value of the result is computed from the values of `self`, which is left untouched.
    /// With `p` the pivot element:
    ///
    /// * the pivot becomes `1 / p`,
    /// * the rest of the pivot row is divided by `p`,
    /// * the rest of the pivot column is divided by `-p`,
    /// * any other `a_ij` becomes `(a_ij * p - a_is * a_rj) / p`.
    ///
    /// The pivot row and column are marked as used and their labels are swapped.
    ///
    /// # Arguments
    ///
    /// * `pivot`: A nonzero element in a constraint row and a variable column.
    ///
    /// # Panics
    ///
    /// If the pivot is in the objective row or the constant column, or if it is zero or undefined.
    #[must_use]
    pub fn transform(&self, pivot: Pivot) -> Tableau {
        let Pivot { row: r, column: s } = pivot;
        assert!(r < self.objective_row(), "pivot row {} is not a constraint row", r);
        assert!(s < self.constant_column(), "pivot column {} is not a variable column", s);
        let p = self[(r, s)];
        assert!(!p.is_zero() && !p.is_undefined(), "pivot element at ({}, {}) is {}", r, s, p);

        let mut next = self.clone();
        for (i, row) in next.values.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = match (i == r, j == s) {
                    (true, true) => p.inv(),
                    (true, false) => self[(r, j)] / p,
                    (false, true) => -(self[(i, s)] / p),
                    (false, false) => (self[(i, j)] * p - self[(i, s)] * self[(r, j)]) / p,
                };
            }
        }

        next.used_rows[r] = true;
        next.used_columns[s] = true;
        mem::swap(&mut next.row_labels[r], &mut next.column_labels[s]);

        next
    }

    /// Replace this tableau by the result of `Tableau::transform`.
    ///
    /// # Panics
    ///
    /// Under the same conditions as `Tableau::transform`.
    pub fn pivot(&mut self, pivot: Pivot) {
        *self = self.transform(pivot);
    }

    /// Whether all constraint rows have a non-negative constant.
    pub fn is_feasible(&self) -> bool {
        self.constraint_rows().all(|i| !self.constant(i).is_negative())
    }

    /// Whether no column, used or not, could still improve the objective.
    pub fn is_optimal(&self) -> bool {
        (0..self.constant_column()).all(|j| !self.is_improving(j))
    }

    /// Read the current basic solution.
    ///
    /// Every row label gets the constant of its row, every column label that is not also a row
    /// label gets zero. The objective value is corrected for the sign flip that minimization
    /// problems undergo when they are written in the tableau.
    pub fn solution(&self) -> Solution {
        let mut solution = Solution::new(match self.objective {
            Objective::Maximize => *self.objective_function_value(),
            Objective::Minimize => -self.objective_function_value(),
        });

        for i in self.constraint_rows() {
            solution.set(self.row_labels[i].clone(), *self.constant(i));
        }
        for label in &self.column_labels[..self.constant_column()] {
            if solution.value(label).is_none() {
                solution.set(label.clone(), Rational::zero());
            }
        }

        solution
    }
}

impl Index<(usize, usize)> for Tableau {
    type Output = Rational;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.values[i][j]
    }
}

impl IndexMut<(usize, usize)> for Tableau {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.values[i][j]
    }
}

/// Fixed width columns: a header with the column labels, then one line per row starting with the
/// row label.
///
/// Headers are the labels exactly as `Label` displays them; no sign is prepended. A decision
/// variable reads `-x1` and a slack that became non-basic reads `s2`, never `--x1` or `-s2`.
impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write!(f, "{:width$}", "", width = COLUMN_WIDTH)?;
        for label in &self.column_labels {
            write!(f, "{:<width$}", label, width = COLUMN_WIDTH)?;
        }
        writeln!(f)?;

        for (label, row) in self.row_labels.iter().zip(&self.values) {
            write!(f, "{:<width$}", label, width = COLUMN_WIDTH)?;
            for value in row {
                f.write_str(&value.format(COLUMN_WIDTH))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
