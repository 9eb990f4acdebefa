//! # Text format
//!
//! A tableau is described line by line:
//!
//! ```text
//! # rows, the objective row included
//! 4
//! -6 -5 0 0 0 0
//! 2 -3 1 0 0 5
//! 1 3 0 1 0 11
//! 4 1 0 0 1 15
//! # basic variables, one for each constraint row
//! 3 4 5
//! ```
//!
//! Values are separated by whitespace, and are integers or fractions like `-7/2` of arbitrary size.
//! Only the numerator carries a sign. Everything after
//! a `#` is ignored, as are empty lines. The line with basic variables may be left out if there are
//! no constraint rows.
use log::debug;
use relp_num::RationalBig;

use crate::algorithm::tableau::Tableau;
use crate::io::error::ImportError;

/// Parse a tableau.
///
/// # Errors
///
/// When the text is not in the format described in the module documentation, or when it doesn't
/// describe a tableau in a basic feasible solution state.
pub fn parse(program: &str) -> Result<Tableau<RationalBig>, ImportError> {
    let mut lines = program.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, strip_comment(line)))
        .filter(|(_, line)| !line.is_empty());

    let (line_number, line) = lines.next()
        .ok_or_else(|| unexpected_end("the number of rows"))?;
    let nr_rows = parse_nr_rows(line_number, line)?;

    let rows = (0..nr_rows)
        .map(|i| {
            let (line_number, line) = lines.next()
                .ok_or_else(|| unexpected_end(&format!("row {} of the tableau", i)))?;
            line.split_whitespace()
                .map(|token| parse_number(line_number, token))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let basic_variables = if nr_rows > 1 {
        let (line_number, line) = lines.next()
            .ok_or_else(|| unexpected_end("the basic variables"))?;
        line.split_whitespace()
            .map(|token| token.parse::<usize>().map_err(|error| ImportError::parse(
                line_number,
                format!("can't read basic variable \"{}\": {}", token, error),
            )))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        Vec::new()
    };

    if let Some((line_number, _)) = lines.next() {
        return Err(ImportError::parse(line_number, "unexpected content after the tableau"));
    }

    debug!("Read a tableau with {} rows, basis {:?}", nr_rows, basic_variables);
    Ok(Tableau::new(rows, &basic_variables)?)
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#')
        .map_or(line, |(content, _comment)| content)
        .trim()
}

fn unexpected_end(expected: &str) -> ImportError {
    ImportError::UnexpectedEnd { expected: expected.to_string() }
}

fn parse_nr_rows(line_number: usize, line: &str) -> Result<usize, ImportError> {
    match line.parse::<usize>() {
        Ok(0) => Err(ImportError::parse(line_number, "the tableau needs at least an objective row")),
        Ok(nr_rows) => Ok(nr_rows),
        Err(error) => Err(ImportError::parse(
            line_number,
            format!("can't read the number of rows \"{}\": {}", line, error),
        )),
    }
}

/// Read an integer or a fraction, of any size.
fn parse_number(line_number: usize, token: &str) -> Result<RationalBig, ImportError> {
    token.parse::<RationalBig>().map_err(|error| ImportError::parse(
        line_number,
        format!("can't read value \"{}\": {}", token, error),
    ))
}
