use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenType, Position};

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

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::TokenTypeMismatch { .. } => "TokenTypeMismatch",
            ErrorImpl::InvalidKeyword { .. } => "InvalidKeyword",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NoCurrentToken => "NoCurrentToken",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidToken { token } => ErrorTip::Suggestion(format!(
                "`{}` is not a keyword, symbol, integer, string or identifier",
                token
            )),
            ErrorImpl::TokenTypeMismatch {
                expected,
                received,
                token,
            } => ErrorTip::Suggestion(format!(
                "Expected {} but `{}` is {}",
                expected, token, received
            )),
            ErrorImpl::InvalidKeyword { token } => {
                ErrorTip::Suggestion(format!("`{}` is not a reserved word", token))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above 32767?",
                token
            )),
            ErrorImpl::NoCurrentToken => {
                ErrorTip::Suggestion(String::from("Call advance() before reading a token"))
            }
            ErrorImpl::Io { .. } => ErrorTip::None,
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

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid token: {token:?}")]
    InvalidToken { token: String },
    #[error("token type should be {expected}, found {received}: {token:?}")]
    TokenTypeMismatch {
        expected: TokenType,
        received: TokenType,
        token: String,
    },
    #[error("invalid keyword: {token:?}")]
    InvalidKeyword { token: String },
    #[error("error parsing int: {token:?}")]
    NumberParseError { token: String },
    #[error("no token has been read yet")]
    NoCurrentToken,
    #[error("failed to read input: {message}")]
    Io { message: String },
}

impl ErrorImpl {
    /// The offending lexeme, for errors that have one.
    pub fn token(&self) -> Option<&str> {
        match self {
            ErrorImpl::InvalidToken { token }
            | ErrorImpl::TokenTypeMismatch { token, .. }
            | ErrorImpl::InvalidKeyword { token }
            | ErrorImpl::NumberParseError { token } => Some(token),
            ErrorImpl::NoCurrentToken | ErrorImpl::Io { .. } => None,
        }
    }
}
