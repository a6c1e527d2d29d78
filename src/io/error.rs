//! # Error reporting
//!
//! Reading numbers from text and assembling a linear program out of structured terms can both go
//! wrong. The outcomes of the simplex method itself (infeasible, unbounded, out of iterations) are
//! not errors; see `OptimizationResult`.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::ops::Deref;

/// A `ParseError` represents all errors encountered while reading numbers from text.
///
/// It may recursively hold more `ParseError`s to provide more detail. At the end of this chain,
/// there may be the token that caused the error.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseError {
    description: String,
    source: Option<ParseErrorSource>,
}

/// Cause of a `ParseError`: either the offending token, or another `ParseError`.
#[derive(Debug, Eq, PartialEq)]
enum ParseErrorSource {
    Token(String),
    Nested(Box<ParseError>),
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    pub fn new(description: impl Into<String>) -> ParseError {
        ParseError { description: description.into(), source: None }
    }

    /// Create a new `ParseError` that remembers which token could not be read.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `token`: The text that caused the error.
    pub fn with_token(description: impl Into<String>, token: &str) -> ParseError {
        ParseError {
            description: description.into(),
            source: Some(ParseErrorSource::Token(token.to_string())),
        }
    }

    /// Wrap a new `ParseError` around an existing one.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `parse_error`: What caused this `ParseError`.
    pub fn with_cause(description: impl Into<String>, parse_error: ParseError) -> ParseError {
        ParseError {
            description: description.into(),
            source: Some(ParseErrorSource::Nested(Box::new(parse_error))),
        }
    }

    /// Descriptions of all errors in the chain, starting with this one.
    pub fn chain_description(&self) -> Vec<String> {
        let mut descriptions = vec![self.description.clone()];

        match &self.source {
            Some(ParseErrorSource::Token(token)) => {
                descriptions.push(format!("\tCaused by token\t\"{}\"", token));
            },
            Some(ParseErrorSource::Nested(error)) => {
                descriptions.append(&mut error.chain_description());
            },
            None => (),
        }

        descriptions
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.chain_description().join("\n"))
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(ParseErrorSource::Nested(error)) => Some(error.deref() as &dyn Error),
            _ => None,
        }
    }
}

/// An `InconsistencyError` is returned when a linear program can't be turned into a tableau.
///
/// This `Error` is not returned when the linear program is infeasible or unbounded. It is meant
/// only for descriptions of linear programs that don't make sense, such as a coefficient that is
/// the result of a division by zero.
#[derive(Debug, Eq, PartialEq)]
pub struct InconsistencyError {
    description: String,
}

impl InconsistencyError {
    /// Wrap a text in an `InconsistencyError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> InconsistencyError {
        InconsistencyError { description: description.into() }
    }
}

impl Display for InconsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InconsistencyError: {}", self.description)
    }
}

impl Error for InconsistencyError {
}
