use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
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

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ExpectedPrimary => "ExpectedPrimary",
            ErrorImpl::ExpectedExpressionAfterDot => "ExpectedExpressionAfterDot",
            ErrorImpl::UnclosedParenthesis => "UnclosedParenthesis",
            ErrorImpl::UnclosedBrace => "UnclosedBrace",
            ErrorImpl::EmptyMatch => "EmptyMatch",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected end of input",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::ExpectedPrimary => ErrorTip::Suggestion(String::from(
                "Expected a name, number, `(` or `{` here",
            )),
            ErrorImpl::ExpectedExpressionAfterDot => ErrorTip::Suggestion(String::from(
                "Expected a name or grouped expression after `.`",
            )),
            ErrorImpl::UnclosedParenthesis => {
                ErrorTip::Suggestion(String::from("Missing closing `)`"))
            }
            ErrorImpl::UnclosedBrace => ErrorTip::Suggestion(String::from("Missing closing `}`")),
            ErrorImpl::EmptyMatch => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.position.1, self.position.0, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expected primary expression")]
    ExpectedPrimary,
    #[error("expected expression after '.'")]
    ExpectedExpressionAfterDot,
    #[error("missing closing ')'")]
    UnclosedParenthesis,
    #[error("missing closing '}}'")]
    UnclosedBrace,
    #[error("token source matched without returning the matched token")]
    EmptyMatch,
}
