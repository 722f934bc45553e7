use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::SecondsFormat;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::user::models::User;
use crate::messages;
use crate::messages::Message;
use crate::user::errors::UserError;

pub mod delete_me;
pub mod get_me;
pub mod health;
pub mod list_users;
pub mod login;
pub mod refresh_token;
pub mod register;
pub mod update_me;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Body shared by every message and error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    #[serde(rename = "messageID")]
    pub message_id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
}

impl MessageBody {
    pub fn new(message: Message) -> Self {
        Self {
            message_id: message.code.to_string(),
            message: message.text.to_string(),
            exception: None,
        }
    }

    fn with_exception(message: Message, exception: String) -> Self {
        Self {
            exception: Some(exception).filter(|e| !e.is_empty()),
            ..Self::new(message)
        }
    }
}

/// User profile as returned by the profile and listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            role: user.role.as_str().to_string(),
            created_at: user.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            updated_at: user.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Error returned by handlers and the auth gate.
///
/// The second field is a developer-facing reason. It is sent as `exception`
/// for client errors and only logged for server errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(Message, String),
    Unauthorized(Message, String),
    Forbidden(Message, String),
    NotFound(Message, String),
    Conflict(Message, String),
    InternalServerError(Message, String),
}

impl ApiError {
    pub fn bad_request(exception: impl Into<String>) -> Self {
        ApiError::BadRequest(messages::ERR_BAD_REQUEST, exception.into())
    }

    pub fn unauthorized(exception: impl Into<String>) -> Self {
        ApiError::Unauthorized(messages::ERR_UNAUTHORIZED, exception.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, exception) = match self {
            ApiError::BadRequest(m, e) => (StatusCode::BAD_REQUEST, m, e),
            ApiError::Unauthorized(m, e) => (StatusCode::UNAUTHORIZED, m, e),
            ApiError::Forbidden(m, e) => (StatusCode::FORBIDDEN, m, e),
            ApiError::NotFound(m, e) => (StatusCode::NOT_FOUND, m, e),
            ApiError::Conflict(m, e) => (StatusCode::CONFLICT, m, e),
            ApiError::InternalServerError(m, e) => (StatusCode::INTERNAL_SERVER_ERROR, m, e),
        };

        let body = if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                message_id = message.code,
                reason = message.text,
                exception = %exception,
                "Request failed"
            );
            MessageBody::new(message)
        } else {
            tracing::warn!(
                status = status.as_u16(),
                message_id = message.code,
                reason = message.text,
                exception = %exception,
                "Request rejected"
            );
            MessageBody::with_exception(message, exception)
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let exception = err.to_string();
        match err {
            AuthError::DuplicateEmail(_) => {
                ApiError::Conflict(messages::ERR_USER_ALREADY_EXISTS, exception)
            }
            AuthError::UserNotFound(_) => {
                ApiError::NotFound(messages::ERR_USER_NOT_FOUND, exception)
            }
            AuthError::InvalidCredentials => {
                ApiError::BadRequest(messages::ERR_INVALID_CREDENTIALS, exception)
            }
            AuthError::InvalidRefreshToken(_) => {
                ApiError::BadRequest(messages::ERR_INVALID_REFRESH_TOKEN, exception)
            }
            AuthError::TokenIssuanceFailed(_) => {
                ApiError::InternalServerError(messages::ERR_USER_LOGIN_FAILED, exception)
            }
            AuthError::Unexpected(_) => {
                ApiError::InternalServerError(messages::ERR_UNEXPECTED_ERROR, exception)
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        let exception = err.to_string();
        match err {
            UserError::NotFound(_) => ApiError::NotFound(messages::ERR_USER_NOT_FOUND, exception),
            UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict(messages::ERR_EMAIL_ALREADY_EXISTS, exception)
            }
            UserError::Forbidden(_) => ApiError::Forbidden(messages::ERR_FORBIDDEN, exception),
            UserError::InvalidUserId(_) | UserError::InvalidName(_) | UserError::InvalidEmail(_) => {
                ApiError::bad_request(exception)
            }
            UserError::InvalidRole(_)
            | UserError::Password(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => {
                ApiError::InternalServerError(messages::ERR_UNEXPECTED_ERROR, exception)
            }
        }
    }
}

/// Reject a missing or blank required field.
pub(crate) fn require(value: String, field: &str) -> Result<String, ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::bad_request(format!("{field} is required")))
    } else {
        Ok(value)
    }
}
