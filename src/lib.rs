//! # An exact linear program solver
//!
//! Linear programs are solved using the tableau form of the two phase Simplex Method, in exact
//! rational arithmetic such that no rounding errors occur.
//!
//! A problem is described as a `GeneralForm`, converted into a `Tableau` and then pivoted until it
//! is optimal, or until it is clear that it is infeasible or unbounded.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
