//! Server state, request bodies and the response envelope.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error_handling::AuditError;

/// Shared state for the HTTP service. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<reqwest::Client>,
    pub config: Arc<Config>,
}

/// Body of `POST /site-audit` and `POST /seo-audit`.
#[derive(Debug, Default, Deserialize)]
pub struct AuditRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Envelope shared by every audit endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(results: T) -> Self {
        Self {
            success: true,
            results: Some(results),
            error: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// An audit failure on its way to the client.
///
/// Caller mistakes map to 400, everything else (including the target site's own
/// error status) to 500; the target's status code is never proxied.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<AuditError> for ApiError {
    fn from(error: AuditError) -> Self {
        let status = if error.is_input_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self {
            status,
            message: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()> {
            success: false,
            results: None,
            error: Some(self.message),
        };
        (self.status, Json(body)).into_response()
    }
}

/// JSON response for `/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
