//! JSON HTTP service.
//!
//! Endpoints:
//! - `POST /site-audit` - technical audit of `{url}`
//! - `POST /seo-audit` - SEO structural audit of `{url}`
//! - `POST /seo-audit-pro/analyze` - Search Console analysis (or demo payload)
//! - `GET /health` - liveness and version
//!
//! Every request is handled independently; the shared HTTP client and the
//! configuration are the only state.

mod handlers;
mod types;

use axum::routing::{get, post};
use axum::Router;

use handlers::{health_handler, seo_audit_handler, seo_pro_handler, site_audit_handler};
pub use types::{ApiError, ApiResponse, AppState, AuditRequest, HealthResponse};

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/site-audit", post(site_audit_handler))
        .route("/seo-audit", post(seo_audit_handler))
        .route("/seo-audit-pro/analyze", post(seo_pro_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Binds `addr` and serves the API until the process is stopped.
pub async fn start_server(addr: &str, state: AppState) -> Result<(), anyhow::Error> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", addr, e))?;

    let local = listener.local_addr()?;
    log::info!("Audit API listening on http://{}/", local);
    log::info!("  - POST http://{}/site-audit", local);
    log::info!("  - POST http://{}/seo-audit", local);
    log::info!("  - POST http://{}/seo-audit-pro/analyze", local);
    log::info!("  - GET  http://{}/health", local);

    axum::serve(listener, router(state))
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;

    fn state() -> AppState {
        AppState {
            client: Arc::new(reqwest::Client::new()),
            config: Arc::new(Config::default()),
        }
    }

    #[tokio::test]
    async fn test_start_server_reports_bind_failure() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap().to_string();

        let err = start_server(&addr, state()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to bind server"));
        assert!(err.to_string().contains(&addr));
    }

    #[tokio::test]
    async fn test_start_server_rejects_malformed_address() {
        let err = start_server("not-an-address", state()).await.unwrap_err();
        assert!(err.to_string().contains("not-an-address"));
    }
}
