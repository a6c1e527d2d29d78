//! # Strategies
//!
//! Decisions made during the simplex method that don't influence correctness, only the path taken.
pub mod pivot_rule;
