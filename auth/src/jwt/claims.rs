use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Purpose tag carried by every token.
///
/// Access tokens authorize API calls, refresh tokens are only accepted
/// by the refresh endpoint to mint new access tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session claims embedded in access and refresh tokens.
///
/// Timestamps are Unix seconds. A token is only honoured while
/// `exp` lies strictly in the future.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Subject email address
    pub email: String,

    /// Token kind
    pub typ: TokenKind,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims issued now.
    ///
    /// # Arguments
    /// * `subject` - Unique user identifier
    /// * `email` - User email address
    /// * `kind` - Token kind
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// Claims with `iat = now` and `exp = now + ttl`
    pub fn new(subject: impl ToString, email: impl ToString, kind: TokenKind, ttl: Duration) -> Self {
        Self::issued_at(subject, email, kind, Utc::now(), ttl)
    }

    /// Create claims issued at an explicit instant.
    pub fn issued_at(
        subject: impl ToString,
        email: impl ToString,
        kind: TokenKind,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub: subject.to_string(),
            email: email.to_string(),
            typ: kind,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// Check if token is expired.
    ///
    /// A token expiring exactly at `current_timestamp` is already expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
