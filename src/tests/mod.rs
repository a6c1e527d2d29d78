//! # Fixtures shared by the unit tests.
//!
//! Convention for function names:
//!
//! * `fn general_form()`
//! * `fn tableau_form()`
//! * `fn *_values()` for the grid of a tableau at a later stage
