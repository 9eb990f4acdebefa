//! # Algorithms
//!
//! The tableau form of the primal Simplex method. The caller provides a tableau in canonical form,
//! together with the basic variable of each constraint row, and the algorithm pivots until the
//! basis is optimal or the problem is found to be unbounded.
use crate::algorithm::error::SolveError;
use crate::algorithm::primal::primal;
use crate::algorithm::strategy::pivot_rule::{MostNegative, PivotRule};
use crate::algorithm::tableau::Tableau;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::OrderedField;

pub mod error;
pub mod primal;
pub mod strategy;
pub mod tableau;

/// A linear program with a basic feasible solution is either unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[allow(missing_docs)]
#[derive(Eq, PartialEq, Debug)]
pub enum OptimizationResult<F> {
    FiniteOptimum(Solution<F>),
    Unbounded,
}

/// Settings of a single run of the algorithm.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct Options {
    /// Maximum number of pivots before giving up, no limit when `None`.
    pub max_iterations: Option<usize>,
}

/// Maximize using the most negative relative cost rule.
///
/// # Arguments
///
/// * `rows`: Objective row followed by the constraint rows, the right hand side in the last column.
/// * `basic_variables`: For each constraint row, the 1-based index of its basic variable.
///
/// # Errors
///
/// When the input is not a tableau in a basic feasible solution state.
pub fn optimize<F: OrderedField>(
    rows: Vec<Vec<F>>,
    basic_variables: &[usize],
) -> Result<OptimizationResult<F>, SolveError> {
    optimize_with::<F, MostNegative>(rows, basic_variables, &Options::default())
}

/// Maximize with a specific pivot rule and settings.
///
/// # Errors
///
/// When the input is not a tableau in a basic feasible solution state, or when the iteration limit
/// was reached.
pub fn optimize_with<F: OrderedField, PR: PivotRule>(
    rows: Vec<Vec<F>>,
    basic_variables: &[usize],
    options: &Options,
) -> Result<OptimizationResult<F>, SolveError> {
    let mut tableau = Tableau::new(rows, basic_variables)?;
    primal::<F, PR>(&mut tableau, options)
}
