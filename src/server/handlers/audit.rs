//! Audit endpoint handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use super::super::types::{ApiError, ApiResponse, AppState, AuditRequest};
use crate::audit::{run_seo_audit, run_site_audit, AuditReport};
use crate::seo::SeoReport;
use crate::seo_pro::{analyze_seo_pro, SeoProAnalysis, SeoProRequest};

/// Unwraps a JSON body, turning a malformed body into a 400 envelope.
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

fn log_failure(endpoint: &str, target: &str, error: &ApiError) {
    if error.status().is_client_error() {
        log::info!("{} rejected '{}': {}", endpoint, target, error.message());
    } else {
        log::warn!("{} failed for '{}': {}", endpoint, target, error.message());
    }
}

/// `POST /site-audit`
pub async fn site_audit_handler(
    State(state): State<AppState>,
    payload: Result<Json<AuditRequest>, JsonRejection>,
) -> Result<ApiResponse<AuditReport>, ApiError> {
    let url = body(payload)?.url.unwrap_or_default();
    run_site_audit(&state.client, &state.config, &url)
        .await
        .map(ApiResponse::ok)
        .map_err(|e| {
            let error = ApiError::from(e);
            log_failure("/site-audit", &url, &error);
            error
        })
}

/// `POST /seo-audit`
pub async fn seo_audit_handler(
    State(state): State<AppState>,
    payload: Result<Json<AuditRequest>, JsonRejection>,
) -> Result<ApiResponse<SeoReport>, ApiError> {
    let url = body(payload)?.url.unwrap_or_default();
    run_seo_audit(&state.client, &state.config, &url)
        .await
        .map(ApiResponse::ok)
        .map_err(|e| {
            let error = ApiError::from(e);
            log_failure("/seo-audit", &url, &error);
            error
        })
}

/// `POST /seo-audit-pro/analyze`
pub async fn seo_pro_handler(
    State(state): State<AppState>,
    payload: Result<Json<SeoProRequest>, JsonRejection>,
) -> Result<ApiResponse<SeoProAnalysis>, ApiError> {
    let request = body(payload)?;
    analyze_seo_pro(&state.client, &state.config, &request)
        .await
        .map(ApiResponse::ok)
        .map_err(|e| {
            let error = ApiError::from(e);
            let website = request.website.as_deref().unwrap_or_default();
            log_failure("/seo-audit-pro/analyze", website, &error);
            error
        })
}
