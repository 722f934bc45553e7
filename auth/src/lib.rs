//! Authentication utilities library
//!
//! Provides the session primitives used by the rental service:
//! - Password hashing (Argon2id)
//! - Typed JWT issuance and verification (access / refresh tokens, HS256)
//! - Token pair coordination
//!
//! The service defines its own ports and adapts these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Typed Tokens
//! ```
//! use auth::{JwtHandler, TokenKind};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler
//!     .issue("user123", "alice@example.com", TokenKind::Access, Duration::hours(1))
//!     .unwrap();
//! let claims = handler.verify(&token, TokenKind::Access).unwrap();
//! assert_eq!(claims.sub, "user123");
//! assert!(handler.verify(&token, TokenKind::Refresh).is_err());
//! ```
//!
//! ## Session Flow
//! ```
//! use auth::{Authenticator, TokenKind};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Login: issue access + refresh tokens
//! let pair = auth.issue_token_pair("user123", "alice@example.com").unwrap();
//! assert_eq!(pair.expires_in, 3600);
//!
//! // Refresh: trade the refresh token for a new access token
//! let claims = auth.validate_token(&pair.refresh_token, TokenKind::Refresh).unwrap();
//! let access_token = auth.issue_access_token(&claims.sub, &claims.email).unwrap();
//! assert!(auth.validate_token(&access_token, TokenKind::Access).is_ok());
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use authenticator::ACCESS_TOKEN_TTL_SECS;
pub use authenticator::REFRESH_TOKEN_TTL_SECS;
pub use authenticator::TokenPair;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenKind;
pub use password::PasswordError;
pub use password::PasswordHasher;
