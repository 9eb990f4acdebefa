//! # Error reporting for reading of tableaus
//!
//! A collection of errors describing any problems encountered during reading and parsing.
use std::io;

use thiserror::Error;

use crate::algorithm::error::InconsistencyError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read the problem: {0}")]
    Io(#[from] io::Error),
    /// A line could not be parsed.
    #[error("line {line}: {description}")]
    Parse {
        /// Line number, starting at 1.
        line: usize,
        /// What's wrong with the line.
        description: String,
    },
    /// The text ended before the tableau was complete.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// What should have followed.
        expected: String,
    },
    /// The text was read, but doesn't describe a tableau in a basic feasible solution state.
    ///
    /// # Note
    ///
    /// If the linear program is unbounded, that will not be represented with this error.
    #[error("inconsistent tableau: {0}")]
    Inconsistent(#[from] InconsistencyError),
}

impl ImportError {
    /// Create a new `Parse` variant.
    ///
    /// # Arguments
    ///
    /// * `line`: Line number, starting at 1.
    /// * `description`: What's wrong at the moment of creation.
    pub fn parse(line: usize, description: impl Into<String>) -> Self {
        Self::Parse { line, description: description.into() }
    }
}
