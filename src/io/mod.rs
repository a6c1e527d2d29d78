//! # Reading of numbers
//!
//! The text format for a single rational is a bare integer (`5`) or a fraction (`-3/4`). Values are
//! separated by whitespace. Turning equations into terms is left to the caller.
use crate::data::number_types::rational::Rational;
use crate::io::error::ParseError;

pub mod error;

/// Read the next rational from a stream of whitespace-delimited tokens.
///
/// # Arguments
///
/// * `tokens`: For example the result of `str::split_whitespace`. One token is consumed.
///
/// # Errors
///
/// If there is no token left or the token is not a valid rational.
pub fn read_rational<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Rational, ParseError> {
    match tokens.next() {
        Some(token) => token.parse(),
        None => Err(ParseError::new("Expected a rational, found the end of the input")),
    }
}

/// Read all whitespace-delimited rationals in a text.
///
/// # Errors
///
/// When any of the tokens is not a valid rational. The error mentions the position of that token.
pub fn read_rationals(text: &str) -> Result<Vec<Rational>, ParseError> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, token)| token.parse().map_err(|error| {
            ParseError::with_cause(format!("Could not read value {}", index + 1), error)
        }))
        .collect()
}
