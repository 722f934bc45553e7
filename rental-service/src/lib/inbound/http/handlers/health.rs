use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> ApiSuccess<HealthResponse> {
    ApiSuccess::new(StatusCode::OK, HealthResponse { status: "ok" })
}
