use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenKind;
use super::errors::JwtError;

/// JWT token handler for issuing and verifying session tokens.
///
/// Signs with HS256 (HMAC with SHA-256). Verification is pinned to HS256:
/// a token whose header names any other algorithm is rejected as having
/// an invalid signature.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Rotating the secret invalidates every outstanding token
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// # Arguments
    /// * `subject` - Subject identifier
    /// * `email` - Subject email address
    /// * `kind` - Token kind
    /// * `ttl` - Token lifetime
    ///
    /// # Returns
    /// Compact JWS token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        subject: &str,
        email: &str,
        kind: TokenKind,
        ttl: Duration,
    ) -> Result<String, JwtError> {
        self.encode(&Claims::new(subject, email, kind, ttl))
    }

    /// Encode prepared claims into a signed token.
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// Checks run in a fixed order: signature and algorithm, claim
    /// structure, expiry, then token kind.
    ///
    /// # Arguments
    /// * `token` - JWT token string to verify
    /// * `expected_kind` - Kind the consuming endpoint accepts
    ///
    /// # Returns
    /// Verified claims
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature mismatch or unexpected algorithm
    /// * `MalformedToken` - Token or claims cannot be decoded
    /// * `TokenExpired` - `exp` is not in the future
    /// * `WrongTokenType` - Token kind differs from `expected_kind`
    pub fn verify(&self, token: &str, expected_kind: TokenKind) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below without leeway
        validation.validate_exp = false;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    JwtError::InvalidSignature
                }
                _ => JwtError::MalformedToken(e.to_string()),
            })?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        if claims.typ != expected_kind {
            return Err(JwtError::WrongTokenType {
                expected: expected_kind,
                actual: claims.typ,
            });
        }

        Ok(claims)
    }
}
