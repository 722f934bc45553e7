//! Password hashing off the async workers, on tokio's blocking pool.

use auth::PasswordError;
use auth::PasswordHasher;

pub async fn hash_password(
    hasher: PasswordHasher,
    password: String,
) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| PasswordError::HashingFailed(format!("Hashing task failed: {}", e)))?
}

pub async fn verify_password(
    hasher: PasswordHasher,
    password: String,
    hash: String,
) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .map_err(|e| PasswordError::VerificationFailed(format!("Verification task failed: {}", e)))?
}
