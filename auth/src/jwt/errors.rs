use thiserror::Error;

use super::claims::TokenKind;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    MalformedToken(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Wrong token type: expected {expected}, got {actual}")]
    WrongTokenType {
        expected: TokenKind,
        actual: TokenKind,
    },
}
