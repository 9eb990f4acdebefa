//! # Traits
//!
//! The number type hierarchy used by the tableau. The contract is "mathematically exact": the
//! implementations used with this crate (the `relp-num` rationals) represent every value exactly,
//! which is what makes the pivoting decisions of the simplex method reliable.
use std::fmt::{Debug, Display};
use std::ops::{Div, Mul, Neg, SubAssign};

use num_traits::{One, Zero};

/// The simplex method is defined over the ordered fields.
///
/// Only the operations that the dense tableau actually performs are required. Arithmetic is done
/// with a reference on the right hand side, such that the big integer backed values are only cloned
/// where a new value is needed anyway.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait OrderedField:
    Ord +
    Zero +
    One +
    Neg<Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +
    for<'r> Div<&'r Self, Output=Self> +
    for<'r> SubAssign<&'r Self> +
    Clone +
    Debug +
    Display +
{
}

impl<T> OrderedField for T
where
    T: Ord +
    Zero +
    One +
    Neg<Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +
    for<'r> Div<&'r Self, Output=Self> +
    for<'r> SubAssign<&'r Self> +
    Clone +
    Debug +
    Display +
{
}
