//! # Number types
//!
//! The tableau algorithms are defined over an ordered field. This module names the operations they
//! need; the arbitrary precision implementation is provided by the `relp-num` crate.
//!
//! A benefit of this approach is that the algorithms can be tested with small, fixed size rationals
//! while the same code runs without adaptation on arbitrary precision rationals.
pub mod traits;
