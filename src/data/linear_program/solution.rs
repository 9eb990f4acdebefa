//! # Representation of feasible solutions
//!
//! Once a linear program is fully solved, a solution is derived. It contains the value of every
//! variable, the slack variables included.
use std::fmt::{Display, Formatter, Result as FormatResult};

/// Represents a full solution to a linear program.
///
/// Should represent a solution that is feasible. This struct would probably be used to print the
/// optimal solution for the user.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Solution<F> {
    /// Value of the objective function for this solution.
    objective_value: F,
    /// Solution value for all variables, `x_1` first.
    solution_values: Vec<F>,
}

impl<F> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: F, solution_values: Vec<F>) -> Self {
        Self {
            objective_value,
            solution_values,
        }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// Values of all variables, `x_1` first.
    pub fn solution_values(&self) -> &[F] {
        &self.solution_values
    }

    /// Value of variable `x_j`, with `j` starting at 1.
    pub fn value(&self, j: usize) -> Option<&F> {
        j.checked_sub(1).and_then(|index| self.solution_values.get(index))
    }
}

impl<F: Display> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "max Z = {}", self.objective_value)?;
        for (j, value) in self.solution_values.iter().enumerate() {
            writeln!(f, "x_{} = {}", j + 1, value)?;
        }

        Ok(())
    }
}
