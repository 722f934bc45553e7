use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenKind;

/// Default access token lifetime (1 hour).
pub const ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Default refresh token lifetime (7 days).
pub const REFRESH_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Session token coordinator.
///
/// Owns the signing key and the token lifetimes, and turns an
/// authenticated subject into an access/refresh token pair.
pub struct Authenticator {
    jwt_handler: JwtHandler,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
}

/// Tokens handed to a client after login or refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,
    /// JWT refresh token
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl Authenticator {
    /// Create a new authenticator with default token lifetimes.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            jwt_handler: JwtHandler::new(jwt_secret),
            access_token_ttl: Duration::seconds(ACCESS_TOKEN_TTL_SECS),
            refresh_token_ttl: Duration::seconds(REFRESH_TOKEN_TTL_SECS),
        }
    }

    /// Override token lifetimes.
    pub fn with_token_ttls(mut self, access: Duration, refresh: Duration) -> Self {
        self.access_token_ttl = access;
        self.refresh_token_ttl = refresh;
        self
    }

    /// Access token lifetime in seconds, as reported to clients.
    pub fn access_token_expires_in(&self) -> i64 {
        self.access_token_ttl.num_seconds()
    }

    /// Issue an access token and a refresh token for the same subject.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token_pair(&self, subject: &str, email: &str) -> Result<TokenPair, JwtError> {
        let access_token = self.issue_access_token(subject, email)?;
        let refresh_token =
            self.jwt_handler
                .issue(subject, email, TokenKind::Refresh, self.refresh_token_ttl)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.access_token_expires_in(),
        })
    }

    /// Issue a single access token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_access_token(&self, subject: &str, email: &str) -> Result<String, JwtError> {
        self.jwt_handler
            .issue(subject, email, TokenKind::Access, self.access_token_ttl)
    }

    /// Validate a token of the expected kind and return its claims.
    ///
    /// # Errors
    /// * `InvalidSignature`, `MalformedToken`, `TokenExpired`, `WrongTokenType`
    pub fn validate_token(&self, token: &str, expected_kind: TokenKind) -> Result<Claims, JwtError> {
        self.jwt_handler.verify(token, expected_kind)
    }
}
