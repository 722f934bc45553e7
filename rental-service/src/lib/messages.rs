//! Stable message codes shared by logs and API responses.
//!
//! Codes end in `I` for informational events and `E` for errors.

/// A message code paired with its human-readable category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub code: &'static str,
    pub text: &'static str,
}

impl Message {
    const fn new(code: &'static str, text: &'static str) -> Self {
        Self { code, text }
    }
}

// System
pub const INFO_STARTING_SERVER: Message = Message::new("SYS001I", "Starting server");
pub const INFO_SERVER_UP: Message = Message::new("SYS002I", "Server is up and running");
pub const ERR_SERVER_STARTUP: Message = Message::new("SYS003E", "Failed to start server");
pub const ERR_UNEXPECTED_ERROR: Message = Message::new("SYS004E", "Unexpected Error");
pub const ERR_BAD_REQUEST: Message = Message::new("SYS005E", "Bad Request");

// Auth
pub const ERR_INVALID_REFRESH_TOKEN: Message =
    Message::new("AUTH002E", "Refresh token invalid or expired");
pub const INFO_ACCESS_TOKEN_SUCCESS: Message =
    Message::new("AUTH003I", "Generated access token successfully");
pub const ERR_INVALID_ACCESS_TOKEN: Message =
    Message::new("AUTH004E", "Access token invalid or expired");
pub const ERR_FORBIDDEN: Message = Message::new("AUTH005E", "Insufficient privileges");
pub const ERR_UNAUTHORIZED: Message = Message::new("AUTH006E", "Missing or invalid token");

// User
pub const INFO_USER_REGISTER_SUCCESS: Message =
    Message::new("USR001I", "User registered successfully");
pub const ERR_INVALID_CREDENTIALS: Message = Message::new("USR002E", "Invalid email or password");
pub const INFO_USER_LOGIN_SUCCESS: Message = Message::new("USR003I", "Login successful");
pub const ERR_USER_LOGIN_FAILED: Message = Message::new("USR004E", "Login failed");
pub const ERR_USER_ALREADY_EXISTS: Message = Message::new("USR005E", "Email already in use");
pub const ERR_USER_NOT_FOUND: Message = Message::new("USR006E", "User not found");
pub const INFO_USER_FETCH_SUCCESS: Message = Message::new("USR007I", "User fetched successfully");
pub const INFO_USER_UPDATE_SUCCESS: Message = Message::new("USR008I", "User updated successfully");
pub const ERR_EMAIL_ALREADY_EXISTS: Message = Message::new("USR009E", "Email already in use");
pub const INFO_USER_DELETE_SUCCESS: Message = Message::new("USR010I", "User deleted successfully");
