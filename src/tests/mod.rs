//! # Problems shared by the unit tests.
//!
//! Convention for function names:
//!
//! * `fn tableau_form()`: the tableau as supplied by a caller
//! * `fn first_pivot_form()`: the tableau after the first basis change
//! * `fn optimal_form()`: the final tableau
use relp_num::RB;
use relp_num::RationalBig;


/// Dense rows from integer data.
pub fn rows(data: &[&[i32]]) -> Vec<Vec<RationalBig>> {
    data.iter()
        .map(|row| row.iter().map(|&value| RB!(value)).collect())
        .collect()
}
