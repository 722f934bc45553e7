use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenKind;
use auth::TokenPair;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::auth::ports::TokenSigner;
use crate::domain::password::hash_password;
use crate::domain::password::verify_password;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserRole;
use crate::user::errors::UserError;

/// Domain service implementation for session operations.
///
/// Stateless apart from its injected collaborators; every call is one-shot.
pub struct AuthService<CS, TS>
where
    CS: CredentialStore,
    TS: TokenSigner,
{
    store: Arc<CS>,
    token_signer: Arc<TS>,
    password_hasher: auth::PasswordHasher,
}

impl<CS, TS> AuthService<CS, TS>
where
    CS: CredentialStore,
    TS: TokenSigner,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential lookup and user creation
    /// * `token_signer` - Session token issuance and verification
    pub fn new(store: Arc<CS>, token_signer: Arc<TS>) -> Self {
        Self {
            store,
            token_signer,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<CS, TS> AuthServicePort for AuthService<CS, TS>
where
    CS: CredentialStore,
    TS: TokenSigner,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError> {
        let email = command.email.as_str().to_string();

        match self.store.find_by_email(&email).await {
            Ok(Some(_)) => return Err(AuthError::DuplicateEmail(email)),
            Ok(None) => {}
            Err(e) => return Err(AuthError::Unexpected(e.to_string())),
        }

        let password_hash = hash_password(self.password_hasher, command.password)
            .await
            .map_err(|e| AuthError::Unexpected(e.to_string()))?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        };

        // The unique constraint settles concurrent registrations of one email
        let created_user = self.store.create(user).await.map_err(|e| match e {
            UserError::EmailAlreadyExists(email) => AuthError::DuplicateEmail(email),
            other => AuthError::Unexpected(other.to_string()),
        })?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<TokenPair, AuthError> {
        let user = self
            .store
            .find_by_email(&command.email)
            .await
            .map_err(|e| AuthError::Unexpected(e.to_string()))?
            .ok_or_else(|| AuthError::UserNotFound(command.email.clone()))?;

        let is_valid = verify_password(
            self.password_hasher,
            command.password,
            user.password_hash.clone(),
        )
        .await
        .map_err(|e| AuthError::Unexpected(e.to_string()))?;

        if !is_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let tokens = self
            .token_signer
            .issue_token_pair(&user.id.to_string(), user.email.as_str())
            .map_err(|e| AuthError::TokenIssuanceFailed(e.to_string()))?;

        tracing::info!(user_id = %user.id, "Session tokens issued");

        Ok(tokens)
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self
            .token_signer
            .verify_token(refresh_token, TokenKind::Refresh)
            .map_err(|e| AuthError::InvalidRefreshToken(e.to_string()))?;

        let access_token = self
            .token_signer
            .issue_access_token(&claims.sub, &claims.email)
            .map_err(|e| AuthError::TokenIssuanceFailed(e.to_string()))?;

        tracing::info!(user_id = %claims.sub, "Access token refreshed");

        Ok(TokenPair {
            access_token,
            refresh_token: refresh_token.to_string(),
            expires_in: self.token_signer.access_token_expires_in(),
        })
    }
}
