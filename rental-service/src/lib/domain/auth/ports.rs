use async_trait::async_trait;
use auth::Claims;
use auth::JwtError;
use auth::TokenKind;
use auth::TokenPair;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Port for session operations: registration, login and token refresh.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user. No tokens are issued; the caller logs in next.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `Unexpected` - Store lookup, hashing or persistence failed
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError>;

    /// Verify credentials and issue an access/refresh token pair.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this email
    /// * `InvalidCredentials` - Password does not match
    /// * `TokenIssuanceFailed` - Tokens could not be signed
    /// * `Unexpected` - Store lookup or verification failed
    async fn login(&self, command: LoginCommand) -> Result<TokenPair, AuthError>;

    /// Trade a refresh token for a new access token.
    ///
    /// The refresh token itself is echoed back unchanged.
    ///
    /// # Errors
    /// * `InvalidRefreshToken` - Token is invalid, expired or not a refresh token
    /// * `TokenIssuanceFailed` - Access token could not be signed
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;
}

/// Credential lookups and user creation needed by the session flows.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve user by exact email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;
}

/// Signs and verifies session tokens.
pub trait TokenSigner: Send + Sync + 'static {
    /// Issue an access token and a refresh token for the same subject.
    fn issue_token_pair(&self, subject: &str, email: &str) -> Result<TokenPair, JwtError>;

    /// Issue a single access token.
    fn issue_access_token(&self, subject: &str, email: &str) -> Result<String, JwtError>;

    /// Verify a token of the expected kind.
    fn verify_token(&self, token: &str, expected_kind: TokenKind) -> Result<Claims, JwtError>;

    /// Access token lifetime in seconds.
    fn access_token_expires_in(&self) -> i64;
}
