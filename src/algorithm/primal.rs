//! # The primal Simplex method
//!
//! Moves from basic feasible solution to basic feasible solution until no variable with a negative
//! relative cost is left, or until a variable is found that can increase without bound.
use log::{debug, info, trace};

use crate::algorithm::{OptimizationResult, Options};
use crate::algorithm::error::SolveError;
use crate::algorithm::strategy::pivot_rule::PivotRule;
use crate::algorithm::tableau::Tableau;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::OrderedField;

/// The next step of the primal Simplex method, as decided by a pivot rule.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum PivotDecision {
    /// Bring the variable of `column` into the basis in constraint row `row`.
    Pivot {
        /// Column index of the entering variable.
        column: usize,
        /// Index of the constraint row of the leaving variable.
        row: usize,
    },
    /// No variable has a negative relative cost, the current basis is optimal.
    Optimal,
    /// The variable of `column` has a negative relative cost but no constraint row bounds it.
    Unbounded {
        /// Column index of the variable that can increase without bound.
        column: usize,
    },
}

/// Decide on the next step without changing the tableau.
///
/// # Arguments
///
/// * `tableau`: Tableau in a basic feasible solution state.
/// * `rule`: Pivot rule selecting the entering column and leaving row.
pub fn next_pivot<F, PR>(tableau: &Tableau<F>, rule: &mut PR) -> PivotDecision
where
    F: OrderedField,
    PR: PivotRule,
{
    match rule.select_primal_pivot_column(tableau) {
        Some(column) => match rule.select_primal_pivot_row(tableau, column) {
            Some(row) => PivotDecision::Pivot { column, row },
            None => PivotDecision::Unbounded { column },
        },
        None => PivotDecision::Optimal,
    }
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be nonnegative (primal feasibility)
///
/// Both are checked when the `Tableau` is created and maintained by every pivot.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
///
/// # Errors
///
/// When `options.max_iterations` pivots have been made without reaching a conclusion.
pub fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    options: &Options,
) -> Result<OptimizationResult<F>, SolveError>
where
    F: OrderedField,
    PR: PivotRule,
{
    let mut rule = PR::new();
    let mut iterations = 0;
    loop {
        debug_assert!(tableau.is_in_basic_feasible_solution_state());

        match next_pivot(tableau, &mut rule) {
            PivotDecision::Pivot { column, row } => {
                if let Some(limit) = options.max_iterations {
                    if iterations >= limit {
                        info!("Giving up after {} pivot(s)", iterations);
                        break Err(SolveError::IterationLimitExceeded { limit });
                    }
                }

                let leaving_column = tableau.basis_column_index_for_row(row);
                let degenerate = tableau.constraint_value(row).is_zero();
                debug!(
                    "Pivot {}: x_{} enters, x_{} leaves in row {}, relative cost {}{}",
                    tableau.nr_pivots() + 1,
                    column + 1,
                    leaving_column + 1,
                    row + 1,
                    tableau.relative_cost(column),
                    if degenerate { " (degenerate)" } else { "" },
                );

                tableau.bring_into_basis(column, row);
                iterations += 1;
                trace!("{}", tableau);
            },
            PivotDecision::Unbounded { column } => {
                info!("Unbounded: x_{} can increase without bound after {} pivot(s)", column + 1, iterations);
                break Ok(OptimizationResult::Unbounded);
            },
            PivotDecision::Optimal => {
                info!(
                    "Optimal value {} found after {} pivot(s)",
                    tableau.objective_function_value(),
                    iterations,
                );
                break Ok(OptimizationResult::FiniteOptimum(Solution::new(
                    tableau.objective_function_value().clone(),
                    tableau.extract_solution(),
                )));
            },
        }
    }
}
