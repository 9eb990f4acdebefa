//! # Reading of tableaus
//!
//! The algorithms in this crate are called with an in-memory tableau. This module is a thin
//! adapter for callers that have the tableau as text, see the `text` module for the format.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use relp_num::RationalBig;

use crate::algorithm::tableau::Tableau;
use crate::io::error::ImportError;

pub mod error;
pub mod text;

/// Import a tableau from a file.
///
/// # Errors
///
/// When the file cannot be found or read, the contents can't be parsed or the tableau is not in a
/// basic feasible solution state.
pub fn import(file_path: &Path) -> Result<Tableau<RationalBig>, ImportError> {
    info!("Reading problem file: \"{}\"", file_path.display());

    let file = File::open(file_path)?;
    read(file)
}

/// Read a tableau from any source, such as standard input.
///
/// # Errors
///
/// When reading fails, the contents can't be parsed or the tableau is not in a basic feasible
/// solution state.
pub fn read(mut reader: impl Read) -> Result<Tableau<RationalBig>, ImportError> {
    let mut program = String::new();
    reader.read_to_string(&mut program)?;

    text::parse(&program)
}
