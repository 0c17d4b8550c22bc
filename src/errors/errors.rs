use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone)]
#[error("{internal_error} at {position}")]
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

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Whether an ordered choice may discard this error and try its next alternative.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnexpectedToken { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnresolvedCall { .. } => "UnresolvedCall",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token, expected } if expected.is_empty() => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::UnexpectedToken { token, expected } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                token,
                join_kinds(expected)
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnresolvedCall { name, candidates, .. } if !candidates.is_empty() => {
                let arities = candidates
                    .iter()
                    .map(|arity| arity.to_string())
                    .collect::<Vec<_>>()
                    .join(" or ");
                ErrorTip::Suggestion(format!("Function `{}` takes {} argument(s)", name, arities))
            }
            ErrorImpl::UnresolvedCall { name, .. } => {
                ErrorTip::Suggestion(format!("Function `{}` not declared", name))
            }
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token {token:?}, expected {}", join_kinds(.expected))]
    UnexpectedToken { token: String, expected: Vec<TokenKind> },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unresolved call to {name:?} with {arity} argument(s)")]
    UnresolvedCall { name: String, arity: usize, candidates: Vec<usize> },
}

fn join_kinds(kinds: &[TokenKind]) -> String {
    match kinds {
        [] => String::from("nothing"),
        [kind] => kind.to_string(),
        _ => format!(
            "one of {}",
            kinds.iter().map(|kind| kind.to_string()).collect::<Vec<_>>().join(", ")
        ),
    }
}
