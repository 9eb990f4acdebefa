//! # Representing linear programs
//!
//! Currently only the solution of a linear program; the problem itself is given as a tableau.
pub mod solution;
