//! # An exact simplex tableau solver
//!
//! Linear programs in standard form are solved with the tableau form of the Simplex Method, as
//! described in the book Combinatorial Optimization by Christos H. Papadimitriou and Kenneth
//! Steiglitz. All arithmetic is done with exact rational numbers, such that pivoting decisions are
//! never affected by rounding.
//!
//! The caller provides a tableau that is already in a basic feasible solution state:
//!
//! ```
//! use relp_num::RB;
//! use relp_tableau::algorithm::{optimize, OptimizationResult};
//!
//! // max 6 x_1 + 5 x_2 s.t. 2 x_1 - 3 x_2 <= 5, x_1 + 3 x_2 <= 11, 4 x_1 + x_2 <= 15
//! let rows: Vec<Vec<_>> = [
//!     [-6, -5, 0, 0, 0, 0],
//!     [2, -3, 1, 0, 0, 5],
//!     [1, 3, 0, 1, 0, 11],
//!     [4, 1, 0, 0, 1, 15],
//! ].iter().map(|row| row.iter().map(|&v| RB!(v)).collect()).collect();
//!
//! match optimize(rows, &[3, 4, 5]) {
//!     Ok(OptimizationResult::FiniteOptimum(solution)) => {
//!         assert_eq!(solution.objective_value(), &RB!(349, 11));
//!     },
//!     _ => unreachable!(),
//! }
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
