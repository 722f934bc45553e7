use auth::Authenticator;
use auth::Claims;
use auth::JwtError;
use auth::TokenKind;
use auth::TokenPair;

use crate::domain::auth::ports::TokenSigner;

impl TokenSigner for Authenticator {
    fn issue_token_pair(&self, subject: &str, email: &str) -> Result<TokenPair, JwtError> {
        Authenticator::issue_token_pair(self, subject, email)
    }

    fn issue_access_token(&self, subject: &str, email: &str) -> Result<String, JwtError> {
        Authenticator::issue_access_token(self, subject, email)
    }

    fn verify_token(&self, token: &str, expected_kind: TokenKind) -> Result<Claims, JwtError> {
        self.validate_token(token, expected_kind)
    }

    fn access_token_expires_in(&self) -> i64 {
        Authenticator::access_token_expires_in(self)
    }
}
