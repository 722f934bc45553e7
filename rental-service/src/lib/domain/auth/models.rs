use std::fmt;

use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;

/// Command to register a new user with validated fields.
pub struct RegisterCommand {
    pub name: DisplayName,
    pub email: EmailAddress,
    /// Plain text password (hashed by the service, never stored)
    pub password: String,
}

impl RegisterCommand {
    pub fn new(name: DisplayName, email: EmailAddress, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

impl fmt::Debug for RegisterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterCommand")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credentials presented at login.
///
/// The email is matched exactly as stored, so it is not format-validated.
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
