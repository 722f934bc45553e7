use thiserror::Error;

/// Errors of the registration, login and refresh flows.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Email already in use: {0}")]
    DuplicateEmail(String),

    #[error("No user registered with email: {0}")]
    UserNotFound(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid refresh token: {0}")]
    InvalidRefreshToken(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuanceFailed(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
