//! # Number types
//!
//! The simplex method only needs a field. Exact fractions are used, such that every pivot is
//! computed without any loss of precision.
pub mod rational;
