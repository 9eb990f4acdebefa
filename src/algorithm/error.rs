//! # Errors of the tableau algorithms
//!
//! A tableau that is not in a basic feasible solution state is rejected when it is constructed, so
//! that the pivoting loop never runs on input that would silently produce a wrong answer. Running
//! the loop itself can only fail when the caller asked for an iteration limit.
use thiserror::Error;

/// A tableau and basis that can't be the starting point of the simplex method.
///
/// This error is not returned when the linear program is unbounded, as that is a regular outcome
/// of the algorithm. It describes only input that violates the canonical form of the tableau.
#[derive(Error, Eq, PartialEq, Debug)]
pub enum InconsistencyError {
    /// Not even an objective row was provided.
    #[error("the tableau has no rows, it needs at least an objective row")]
    NoRows,
    /// There should be at least one variable column and the right hand side column.
    #[error("the tableau has {nr_columns} column(s), but needs at least a variable and a right hand side")]
    TooFewColumns {
        /// Width of the objective row.
        nr_columns: usize,
    },
    /// All rows should be as wide as the objective row.
    #[error("row {row} has {found} columns, while the objective row has {expected}")]
    RowLength {
        /// Index of the offending row in the tableau, the objective row being row 0.
        row: usize,
        /// Width of the objective row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// There should be exactly one right hand side value for each constraint.
    #[error("{found} right hand side value(s) were provided for {expected} constraint(s)")]
    RightHandSideLength {
        /// Number of constraints.
        expected: usize,
        /// Number of right hand side values provided.
        found: usize,
    },
    /// There should be exactly one basic variable for each constraint row.
    #[error("{found} basic variable(s) were provided for {expected} constraint row(s)")]
    BasisLength {
        /// Number of constraint rows.
        expected: usize,
        /// Number of basic variables provided.
        found: usize,
    },
    /// Basic variables are numbered from 1 through the number of variables.
    #[error("basic variable x_{variable} doesn't exist, variables are x_1 through x_{nr_variables}")]
    BasisIndexOutOfRange {
        /// The 1-based variable index provided.
        variable: usize,
        /// The number of variables (all columns except the right hand side).
        nr_variables: usize,
    },
    /// A variable can be basic in only one row.
    #[error("variable x_{variable} is basic in more than one row")]
    DuplicateBasisIndex {
        /// The 1-based variable index provided twice.
        variable: usize,
    },
    /// The column of a basic variable should be the identity column of its row, with a zero cost.
    #[error("column of basic variable x_{variable} should be 1 in row {row} and 0 elsewhere, but is {value} in row {offending_row}")]
    NotCanonical {
        /// The 1-based variable index.
        variable: usize,
        /// The tableau row in which the variable is basic.
        row: usize,
        /// The tableau row containing the wrong value.
        offending_row: usize,
        /// Display representation of the wrong value.
        value: String,
    },
    /// The right hand side of a constraint row is negative, so the basis isn't feasible.
    #[error("right hand side of row {row} is {value}, so the basic solution is not feasible")]
    NotFeasible {
        /// The tableau row with a negative right hand side.
        row: usize,
        /// Display representation of the negative value.
        value: String,
    },
}

/// Solving didn't lead to a conclusion.
#[derive(Error, Eq, PartialEq, Debug)]
pub enum SolveError {
    /// The input couldn't be turned into a tableau.
    #[error("inconsistent input: {0}")]
    Inconsistent(#[from] InconsistencyError),
    /// The configured maximum number of pivots was reached before an optimum or unboundedness was
    /// established.
    #[error("no conclusion reached within {limit} pivot(s)")]
    IterationLimitExceeded {
        /// The limit that was configured.
        limit: usize,
    },
}
