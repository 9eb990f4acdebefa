//! # Data structures for Simplex
//!
//! Contains the dense simplex tableau and the elementary operations which can be performed upon it.
//!
//! The tableau is stored row by row. Row `0` is the objective row, holding the relative costs of
//! all variables followed by the current objective function value. All other rows are constraint
//! rows, holding the coefficients of all variables followed by the value of the row's basic
//! variable.
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::algorithm::error::InconsistencyError;
use crate::data::number_types::traits::OrderedField;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns the dense matrix, as well as the data structures that describe the current basis.
#[derive(Clone, Debug)]
pub struct Tableau<F> {
    /// Represents a matrix of size (m + 1) x (n + 1) (includes costs, objective value, constraints
    /// and the right hand side).
    ///
    /// This attribute changes with a basis change.
    rows: Vec<Vec<F>>,

    /// For each constraint row, the column index of the variable that is basic in that row.
    ///
    /// Note that these are 0-based column indices, while variables are named starting at `x_1`.
    basis_indices: Vec<usize>,

    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading.
    basis_columns: HashSet<usize>,

    /// Number of basis changes performed since construction.
    nr_pivots: usize,
}

impl<F> Tableau<F>
where
    F: OrderedField,
{
    /// Create a new tableau after checking that it is in a basic feasible solution state.
    ///
    /// # Arguments
    ///
    /// * `rows`: Objective row followed by the constraint rows, each of equal length. The last
    /// column is the right hand side.
    /// * `basic_variables`: For each constraint row, the 1-based index of the variable that is basic
    /// in that row.
    ///
    /// # Errors
    ///
    /// When the rows and basis don't describe a tableau in canonical form with a feasible right
    /// hand side.
    pub fn new(rows: Vec<Vec<F>>, basic_variables: &[usize]) -> Result<Self, InconsistencyError> {
        let width = match rows.first() {
            None => return Err(InconsistencyError::NoRows),
            Some(objective) if objective.len() < 2 => {
                return Err(InconsistencyError::TooFewColumns { nr_columns: objective.len() });
            },
            Some(objective) => objective.len(),
        };
        if let Some((row, found)) = rows.iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, length)| length != width) {
            return Err(InconsistencyError::RowLength { row, expected: width, found });
        }

        let nr_constraints = rows.len() - 1;
        if basic_variables.len() != nr_constraints {
            return Err(InconsistencyError::BasisLength {
                expected: nr_constraints,
                found: basic_variables.len(),
            });
        }

        let nr_variables = width - 1;
        let mut basis_indices = Vec::with_capacity(nr_constraints);
        let mut basis_columns = HashSet::with_capacity(nr_constraints);
        for (i, &variable) in basic_variables.iter().enumerate() {
            if variable == 0 || variable > nr_variables {
                return Err(InconsistencyError::BasisIndexOutOfRange { variable, nr_variables });
            }
            let column = variable - 1;
            if !basis_columns.insert(column) {
                return Err(InconsistencyError::DuplicateBasisIndex { variable });
            }

            let row = i + 1;
            for (offending_row, other) in rows.iter().enumerate() {
                let value = &other[column];
                let is_identity = if offending_row == row { value.is_one() } else { value.is_zero() };
                if !is_identity {
                    return Err(InconsistencyError::NotCanonical {
                        variable,
                        row,
                        offending_row,
                        value: value.to_string(),
                    });
                }
            }

            basis_indices.push(column);
        }

        if let Some((row, value)) = rows.iter()
            .enumerate()
            .skip(1)
            .map(|(i, row)| (i, &row[nr_variables]))
            .find(|(_, value)| value < &&F::zero()) {
            return Err(InconsistencyError::NotFeasible { row, value: value.to_string() });
        }

        Ok(Self {
            rows,
            basis_indices,
            basis_columns,
            nr_pivots: 0,
        })
    }

    /// Create the tableau of a problem `max c x s.t. A x <= b, x >= 0` with `b >= 0`.
    ///
    /// A slack variable is added for each constraint. These slacks form the initial basis, such
    /// that `x = 0` is the initial basic feasible solution. The slack of constraint `i` is variable
    /// `x_{n + 1 + i}`, with `n` the number of variables in the problem.
    ///
    /// # Arguments
    ///
    /// * `cost`: Objective function coefficients `c`, one for each variable.
    /// * `constraints`: Rows of `A`, each with one coefficient for each variable.
    /// * `b`: Right hand side, one nonnegative value for each constraint.
    ///
    /// # Errors
    ///
    /// When the dimensions don't match, or when `b` has a negative value.
    pub fn from_inequalities(
        cost: Vec<F>,
        constraints: Vec<Vec<F>>,
        b: Vec<F>,
    ) -> Result<Self, InconsistencyError> {
        let nr_constraints = constraints.len();
        if b.len() != nr_constraints {
            return Err(InconsistencyError::RightHandSideLength {
                expected: nr_constraints,
                found: b.len(),
            });
        }
        let nr_variables = cost.len();

        let objective: Vec<F> = cost.into_iter()
            .map(|c| -c)
            .chain((0..=nr_constraints).map(|_| F::zero()))
            .collect();
        let rows = constraints.into_iter()
            .zip(b)
            .enumerate()
            .map(|(i, (mut row, b_i))| {
                row.extend((0..nr_constraints).map(|j| if j == i { F::one() } else { F::zero() }));
                row.push(b_i);
                row
            });
        let rows = Some(objective).into_iter().chain(rows).collect::<Vec<_>>();

        let basic_variables = (0..nr_constraints)
            .map(|i| nr_variables + 1 + i)
            .collect::<Vec<_>>();

        Self::new(rows, &basic_variables)
    }

    /// Brings a column into the basis by row reduction.
    ///
    /// The pivot row is scaled such that the pivot element becomes one, after which a multiple of
    /// it is subtracted from every other row (the objective row included) such that the pivot
    /// column becomes an identity column.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Column index of the entering variable, in range `0` until
    /// `self.nr_columns()`. Is not yet in the basis.
    /// * `pivot_row_index`: Index of the constraint row of the leaving variable, in range `0` until
    /// `self.nr_rows()`.
    ///
    /// # Panics
    ///
    /// When either index is out of range, when the column is already basic or when the pivot
    /// element is zero. The resulting tableau is only primal feasible if the row was chosen by a
    /// ratio test, as `next_pivot` does.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize) {
        assert!(
            pivot_column_index < self.nr_columns(),
            "column {} out of range, there are {} variables", pivot_column_index, self.nr_columns(),
        );
        assert!(
            pivot_row_index < self.nr_rows(),
            "row {} out of range, there are {} constraint rows", pivot_row_index, self.nr_rows(),
        );
        assert!(!self.is_in_basis(pivot_column_index), "x_{} is already basic", pivot_column_index + 1);

        let pivot_row = pivot_row_index + 1;
        let pivot = self.rows[pivot_row][pivot_column_index].clone();
        assert!(!pivot.is_zero(), "pivot element in row {} of x_{} is zero", pivot_row_index, pivot_column_index + 1);

        let scaled = self.rows[pivot_row].iter()
            .map(|value| value.clone() / &pivot)
            .collect::<Vec<_>>();

        for (_, row) in self.rows.iter_mut()
            .enumerate()
            .filter(|&(i, _)| i != pivot_row) {
            let factor = row[pivot_column_index].clone();
            if factor.is_zero() {
                continue;
            }

            for (value, pivot_value) in row.iter_mut().zip(&scaled) {
                *value -= &(factor.clone() * pivot_value);
            }
        }
        self.rows[pivot_row] = scaled;

        let leaving_column = self.basis_indices[pivot_row_index];
        self.update_basis_indices(pivot_row_index, pivot_column_index, leaving_column);
        self.nr_pivots += 1;
    }

    /// Update the basis index.
    ///
    /// Removes the index of the variable leaving the basis from the `basis_columns` attribute,
    /// while inserting the entering variable index.
    fn update_basis_indices(
        &mut self,
        pivot_row_index: usize,
        pivot_column: usize,
        leaving_column: usize,
    ) {
        self.basis_indices[pivot_row_index] = pivot_column;

        let was_there = self.basis_columns.remove(&leaving_column);
        debug_assert!(was_there);
        let was_not_there = self.basis_columns.insert(pivot_column);
        debug_assert!(was_not_there);
    }

    /// All constraint rows with a strictly positive coefficient in a column, with their ratio.
    ///
    /// Rows with a zero or negative coefficient don't bound the increase of the variable and are
    /// skipped.
    ///
    /// # Arguments
    ///
    /// * `column`: Column index of the variable, in range `0` until `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// Tuples of constraint row index and the ratio between the right hand side and coefficient,
    /// in increasing row order.
    pub fn ratios(&self, column: usize) -> impl Iterator<Item=(usize, F)> + '_ {
        debug_assert!(column < self.nr_columns());

        (0..self.nr_rows())
            .map(move |i| (i, self.coefficient(i, column)))
            .filter(|(_, xij)| xij > &&F::zero())
            .map(move |(i, xij)| (i, self.constraint_value(i).clone() / xij))
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the minimal ratio
    /// between the current constraint value and the (strictly positive) column value. When there
    /// are multiple choices for the pivot row, the first one is chosen.
    ///
    /// # Arguments
    ///
    /// * `column`: Column index of the entering variable.
    ///
    /// # Return value
    ///
    /// Index of the constraint row to pivot on. If not found, the problem is unbounded.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        self.ratios(column)
            .min_by(|(_, left), (_, right)| left.cmp(right))
            .map(|(i, _)| i)
    }

    /// Get the current basic feasible solution.
    ///
    /// # Return value
    ///
    /// A value for each variable. Non basic variables are zero, basic variables have the value of
    /// the right hand side of their row.
    pub fn extract_solution(&self) -> Vec<F> {
        let mut solution = vec![F::zero(); self.nr_columns()];
        for (i, &j) in self.basis_indices.iter().enumerate() {
            solution[j] = self.constraint_value(i).clone();
        }

        solution
    }

    /// Check whether the tableau currently has a valid basic feasible solution.
    ///
    /// That is, each basis column is an identity column with zero relative cost, and all constraint
    /// values are nonnegative.
    pub fn is_in_basic_feasible_solution_state(&self) -> bool {
        // Correct number of basis columns (uniqueness is implied because it's a set)
        self.basis_columns.len() == self.nr_rows() &&
            self.basis_indices.iter().all(|j| self.basis_columns.contains(j)) &&
            self.basis_indices.iter().enumerate().all(|(i, &j)| {
                self.relative_cost(j).is_zero() && (0..self.nr_rows()).all(|k| {
                    let value = self.coefficient(k, j);
                    if k == i { value.is_one() } else { value.is_zero() }
                })
            }) &&
            (0..self.nr_rows()).all(|i| self.constraint_value(i) >= &F::zero())
    }
}

impl<F> Tableau<F> {
    /// Relative cost of a column, as it is stored in the objective row.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index of the variable, in range `0` until `self.nr_columns()`.
    pub fn relative_cost(&self, j: usize) -> &F {
        debug_assert!(j < self.nr_columns());

        &self.rows[0][j]
    }

    /// The relative costs of all variables, in column order.
    pub fn relative_costs(&self) -> &[F] {
        &self.rows[0][..self.nr_columns()]
    }

    /// Single element of the constraint matrix with respect to the current basis.
    ///
    /// # Arguments
    ///
    /// * `i`: Constraint row index, in range `0` until `self.nr_rows()`.
    /// * `j`: Column index of the variable, in range `0` until `self.nr_columns()`.
    pub fn coefficient(&self, i: usize, j: usize) -> &F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        &self.rows[i + 1][j]
    }

    /// Value of the basic variable of a constraint row.
    ///
    /// # Arguments
    ///
    /// * `i`: Constraint row index, in range `0` until `self.nr_rows()`.
    pub fn constraint_value(&self, i: usize) -> &F {
        debug_assert!(i < self.nr_rows());

        &self.rows[i + 1][self.nr_columns()]
    }

    /// Get the value of the objective function of the current solution.
    ///
    /// The objective row is stored as `Z - c x = 0`, so the right hand side of that row is `Z`.
    pub fn objective_function_value(&self) -> &F {
        &self.rows[0][self.nr_columns()]
    }

    /// Column index of the variable that is basic in a constraint row.
    pub fn basis_column_index_for_row(&self, i: usize) -> usize {
        self.basis_indices[i]
    }

    /// The basic variables of all constraint rows, as 1-based variable indices.
    pub fn basic_variables(&self) -> Vec<usize> {
        self.basis_indices.iter().map(|j| j + 1).collect()
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// The dense matrix, objective row first, right hand side last.
    pub fn rows(&self) -> &[Vec<F>] {
        &self.rows
    }

    /// Number of constraint rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.rows.len() - 1
    }

    /// Number of variables in the problem, all columns except the right hand side.
    pub fn nr_columns(&self) -> usize {
        self.rows[0].len() - 1
    }

    /// Number of basis changes since this tableau was created.
    pub fn nr_pivots(&self) -> usize {
        self.nr_pivots
    }
}

impl<F: Display> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let row_counter_width = "cost".len().max(self.nr_rows().to_string().len());

        writeln!(f, "=== Tableau ===")?;
        let cells = self.rows.iter()
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let headers = (1..=self.nr_columns())
            .map(|j| format!("x_{}", j))
            .chain(Some("b".to_string()))
            .collect::<Vec<_>>();
        let column_width = headers.iter()
            .enumerate()
            .map(|(j, header)| {
                cells.iter().map(|row| row[j].len()).fold(header.len(), usize::max)
            })
            .collect::<Vec<_>>();
        let total_width = (row_counter_width + 1) + 1 +
            column_width.iter().map(|width| 1 + width).sum::<usize>();

        // Column counters
        write!(f, "{0:>width$} |", "", width = row_counter_width)?;
        for (header, width) in headers.iter().zip(&column_width) {
            write!(f, " {0:^width$}", header, width = width)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Cost row
        write!(f, "{0:>width$} |", "cost", width = row_counter_width)?;
        for (value, width) in cells[0].iter().zip(&column_width) {
            write!(f, " {0:^width$}", value, width = width)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Row counter and row data
        for (i, row) in cells.iter().enumerate().skip(1) {
            write!(f, "{0:>width$} |", i, width = row_counter_width)?;
            for (value, width) in row.iter().zip(&column_width) {
                write!(f, " {0:^width$}", value, width = width)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Basis Columns ===")?;
        writeln!(f, "{:?}", self.basic_variables())
    }
}

#[cfg(test)]
mod test {
    use relp_num::RB;
    use relp_num::RationalBig;

    use crate::algorithm::error::InconsistencyError;
    use crate::algorithm::tableau::Tableau;
    use crate::tests::{problem_1, problem_2, rows};

    type S = RationalBig;

    #[test]
    fn create_tableau() {
        let tableau = problem_1::tableau_form();
        assert_eq!(tableau.nr_rows(), 3);
        assert_eq!(tableau.nr_columns(), 5);
        assert_eq!(tableau.nr_pivots(), 0);
        assert_eq!(tableau.basic_variables(), vec![3, 4, 5]);
        assert!(tableau.is_in_basis(2));
        assert!(!tableau.is_in_basis(0));
        assert_eq!(tableau.relative_cost(0), &RB!(-6));
        assert_eq!(tableau.coefficient(0, 1), &RB!(-3));
        assert_eq!(tableau.constraint_value(2), &RB!(15));
        assert_eq!(tableau.objective_function_value(), &RB!(0));
        assert!(tableau.is_in_basic_feasible_solution_state());
    }

    #[test]
    fn from_inequalities() {
        let tableau = Tableau::<S>::from_inequalities(
            vec![RB!(6), RB!(5)],
            vec![
                vec![RB!(2), RB!(-3)],
                vec![RB!(1), RB!(3)],
                vec![RB!(4), RB!(1)],
            ],
            vec![RB!(5), RB!(11), RB!(15)],
        ).unwrap();
        let expected = problem_1::tableau_form();
        assert_eq!(tableau.rows(), expected.rows());
        assert_eq!(tableau.basic_variables(), expected.basic_variables());
    }

    #[test]
    fn from_inequalities_dimensions() {
        let result = Tableau::<S>::from_inequalities(
            vec![RB!(1)],
            vec![vec![RB!(1)], vec![RB!(2)]],
            vec![RB!(1)],
        );
        assert_eq!(result.unwrap_err(), InconsistencyError::RightHandSideLength { expected: 2, found: 1 });

        let result = Tableau::<S>::from_inequalities(
            vec![RB!(1), RB!(1)],
            vec![vec![RB!(1)]],
            vec![RB!(1)],
        );
        assert_eq!(result.unwrap_err(), InconsistencyError::RowLength { row: 1, expected: 4, found: 3 });

        let result = Tableau::<S>::from_inequalities(vec![RB!(1)], vec![vec![RB!(1)]], vec![RB!(-1)]);
        assert!(matches!(result.unwrap_err(), InconsistencyError::NotFeasible { row: 1, .. }));
    }

    #[test]
    fn inconsistent_input() {
        let no_rows: Vec<Vec<S>> = vec![];
        assert_eq!(Tableau::new(no_rows, &[]).unwrap_err(), InconsistencyError::NoRows);

        let result = Tableau::new(rows(&[&[1]]), &[]);
        assert_eq!(result.unwrap_err(), InconsistencyError::TooFewColumns { nr_columns: 1 });

        let result = Tableau::new(rows(&[&[1, 0, 0], &[1, 1]]), &[2]);
        assert_eq!(result.unwrap_err(), InconsistencyError::RowLength { row: 1, expected: 3, found: 2 });

        let valid = [&[-1, 0, 0][..], &[1, 1, 2]];
        let result = Tableau::new(rows(&valid), &[2, 1]);
        assert_eq!(result.unwrap_err(), InconsistencyError::BasisLength { expected: 1, found: 2 });

        let result = Tableau::new(rows(&valid), &[0]);
        assert_eq!(result.unwrap_err(), InconsistencyError::BasisIndexOutOfRange { variable: 0, nr_variables: 2 });
        let result = Tableau::new(rows(&valid), &[3]);
        assert_eq!(result.unwrap_err(), InconsistencyError::BasisIndexOutOfRange { variable: 3, nr_variables: 2 });

        let result = Tableau::new(rows(&[&[0, 0, 0], &[1, 0, 1], &[0, 1, 1]]), &[1, 1]);
        assert_eq!(result.unwrap_err(), InconsistencyError::DuplicateBasisIndex { variable: 1 });

        // Variable x_1 has a nonzero relative cost
        let result = Tableau::new(rows(&valid), &[1]);
        assert_eq!(result.unwrap_err(), InconsistencyError::NotCanonical {
            variable: 1,
            row: 1,
            offending_row: 0,
            value: RB!(-1).to_string(),
        });

        let result = Tableau::new(rows(&[&[0, 0, 0], &[2, 1, 2]]), &[1]);
        assert!(matches!(result.unwrap_err(), InconsistencyError::NotCanonical { offending_row: 1, .. }));

        let result = Tableau::new(rows(&[&[-1, 0, 0], &[1, 1, -2]]), &[2]);
        assert_eq!(result.unwrap_err(), InconsistencyError::NotFeasible { row: 1, value: RB!(-2).to_string() });
    }

    #[test]
    fn select_pivot_row() {
        let tableau = problem_1::tableau_form();
        assert_eq!(tableau.ratios(0).collect::<Vec<_>>(), vec![
            (0, RB!(5, 2)),
            (1, RB!(11)),
            (2, RB!(15, 4)),
        ]);
        assert_eq!(tableau.select_primal_pivot_row(0), Some(0));
        // Negative coefficient in the first row is skipped
        assert_eq!(tableau.ratios(1).collect::<Vec<_>>(), vec![(1, RB!(11, 3)), (2, RB!(15))]);
        assert_eq!(tableau.select_primal_pivot_row(1), Some(1));
    }

    #[test]
    fn select_pivot_row_ties_and_zeros() {
        // Equal ratios, the first row wins
        let tableau = Tableau::<S>::new(rows(&[&[-1, 0, 0, 0], &[2, 1, 0, 4], &[1, 0, 1, 2]]), &[2, 3]).unwrap();
        assert_eq!(tableau.select_primal_pivot_row(0), Some(0));

        // A zero coefficient doesn't take part in the ratio test
        let tableau = problem_2::first_pivot_form();
        assert_eq!(tableau.ratios(1).collect::<Vec<_>>(), vec![(1, RB!(4))]);
        assert_eq!(tableau.select_primal_pivot_row(1), Some(1));

        // No positive coefficient at all
        let tableau = Tableau::<S>::new(rows(&[&[-2, -1, 0, 0, 0], &[0, 1, 1, 0, 3], &[-1, 1, 0, 1, 2]]), &[3, 4]).unwrap();
        assert_eq!(tableau.select_primal_pivot_row(0), None);
    }

    #[test]
    fn bring_into_basis() {
        let mut tableau = problem_1::tableau_form();
        tableau.bring_into_basis(0, 0);
        let expected = problem_1::first_pivot_form();
        assert_eq!(tableau.rows(), expected.rows());
        assert_eq!(tableau.basic_variables(), vec![1, 4, 5]);
        assert_eq!(tableau.nr_pivots(), 1);
        assert!(tableau.is_in_basic_feasible_solution_state());
        assert!(!tableau.is_in_basis(2));
        assert!(tableau.is_in_basis(0));
    }

    #[test]
    fn degenerate_pivot() {
        let mut tableau = problem_2::tableau_form();
        tableau.bring_into_basis(0, 0);
        let expected = problem_2::first_pivot_form();
        assert_eq!(tableau.rows(), expected.rows());
        assert_eq!(tableau.basic_variables(), vec![1, 4]);
        // Entered, but at zero level
        assert_eq!(tableau.extract_solution()[0], RB!(0));
        assert_eq!(tableau.objective_function_value(), &RB!(0));
        assert!(tableau.is_in_basic_feasible_solution_state());
    }

    #[test]
    #[should_panic]
    fn bring_basic_column_into_basis() {
        let mut tableau = problem_1::tableau_form();
        tableau.bring_into_basis(2, 1);
    }

    #[test]
    #[should_panic]
    fn bring_into_basis_on_zero() {
        // x_2 has a zero coefficient in the first constraint row after the first pivot
        let mut tableau = problem_2::first_pivot_form();
        tableau.bring_into_basis(1, 0);
    }

    #[test]
    #[should_panic]
    fn bring_into_basis_row_out_of_range() {
        let mut tableau = problem_1::tableau_form();
        tableau.bring_into_basis(0, 3);
    }

    #[test]
    fn extract_solution() {
        let tableau = problem_1::tableau_form();
        assert_eq!(tableau.extract_solution(), vec![RB!(0), RB!(0), RB!(5), RB!(11), RB!(15)]);

        let tableau = problem_1::optimal_form();
        assert_eq!(tableau.extract_solution(), vec![RB!(34, 11), RB!(29, 11), RB!(74, 11), RB!(0), RB!(0)]);
    }

    #[test]
    fn display() {
        let text = problem_1::tableau_form().to_string();
        assert!(text.starts_with("=== Tableau ===\n"));
        assert!(text.contains("x_5"));
        assert!(text.ends_with("=== Basis Columns ===\n[3, 4, 5]\n"));
        // Title, header, separator, cost, separator, three rows, empty line and the basis
        assert_eq!(text.lines().count(), 1 + 4 + 3 + 1 + 2);
    }
}
