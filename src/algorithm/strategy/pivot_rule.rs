//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use itertools::Itertools;

use crate::algorithm::tableau::Tableau;
use crate::data::number_types::traits::OrderedField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. By default, this is the row with the
/// minimal ratio that comes first, but rules can override that choice.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Index of a column with a negative relative cost, or `None` if there is no such column and
    /// the current basis is optimal.
    fn select_primal_pivot_column<F: OrderedField>(&mut self, tableau: &Tableau<F>) -> Option<usize>;

    /// Row selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Index of a constraint row with a strictly positive coefficient in the column and a minimal
    /// ratio, or `None` if there is no such row and the problem is unbounded.
    fn select_primal_pivot_row<F: OrderedField>(
        &mut self,
        tableau: &Tableau<F>,
        column: usize,
    ) -> Option<usize> {
        tableau.select_primal_pivot_row(column)
    }
}

/// Pivot on the column which has the most negative relative cost.
///
/// Ties are broken by taking the column with the lowest index, and the leaving row is the first row
/// with the minimal ratio. This rule may cycle on degenerate problems.
pub struct MostNegative;
impl PivotRule for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: OrderedField>(&mut self, tableau: &Tableau<F>) -> Option<usize> {
        tableau.relative_costs().iter()
            .position_min()
            .filter(|&j| tableau.relative_cost(j) < &F::zero())
    }
}

/// Bland's anti cycling rule.
///
/// Pivot on the first column which has a negative relative cost. When there are multiple choices
/// for the pivot row, the row whose basic variable has the lowest index leaves the basis. The
/// Simplex method doesn't cycle with this rule.
pub struct Bland;
impl PivotRule for Bland {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: OrderedField>(&mut self, tableau: &Tableau<F>) -> Option<usize> {
        (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .find(|&column| tableau.relative_cost(column) < &F::zero())
    }

    fn select_primal_pivot_row<F: OrderedField>(
        &mut self,
        tableau: &Tableau<F>,
        column: usize,
    ) -> Option<usize> {
        tableau.ratios(column)
            .min_by(|(left_row, left_ratio), (right_row, right_ratio)| {
                left_ratio.cmp(right_ratio).then_with(|| {
                    let left_column = tableau.basis_column_index_for_row(*left_row);
                    let right_column = tableau.basis_column_index_for_row(*right_row);
                    left_column.cmp(&right_column)
                })
            })
            .map(|(row, _)| row)
    }
}
