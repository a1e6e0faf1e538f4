use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnparseableStart { .. } => "UnparseableStart",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::EmptyMatch => "EmptyMatch",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnparseableStart { token } => ErrorTip::Suggestion(format!(
                "Cannot parse an expression beginning with `{}`",
                token
            )),
            ErrorImpl::ExpectedToken { found, expected } => {
                ErrorTip::Suggestion(format!("Expected {}, found `{}`", expected, found))
            }
            ErrorImpl::EmptyMatch => ErrorTip::Suggestion(String::from(
                "A match expression needs at least one `|` case or an `else` clause",
            )),
            ErrorImpl::IntegerParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("cannot parse expression beginning with {token:?}")]
    UnparseableStart { token: String },
    #[error("expected {expected}, found {found:?}")]
    ExpectedToken { found: String, expected: String },
    #[error("match expression has no cases")]
    EmptyMatch,
    #[error("error parsing integer: {token:?}")]
    IntegerParseError { token: String },
}
