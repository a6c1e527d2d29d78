//! # Representing linear programs
//!
//! A linear program is described in general form, where constraints may be of any type. Solving
//! it results in a solution.
pub mod elements;
pub mod general_form;
pub mod solution;
