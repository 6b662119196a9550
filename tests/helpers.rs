// Shared test helpers: mock target sites and an in-process API server.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use site_audit::{router, AppState, Config};

/// Configuration with short timeouts and no SEO Pro demo delay.
#[allow(dead_code)] // Used by other test files
pub fn test_config() -> Config {
    Config {
        page_timeout: Duration::from_secs(5),
        stylesheet_timeout: Duration::from_secs(2),
        seo_pro_demo_delay: Duration::ZERO,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to build test client")
}

/// Serves `html` at `route` on the mock server.
#[allow(dead_code)]
pub async fn mount_html(server: &MockServer, route: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(html),
        )
        .mount(server)
        .await;
}

/// Serves `css` at `route` on the mock server.
#[allow(dead_code)]
pub async fn mount_css(server: &MockServer, route: &str, css: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/css")
                .set_body_string(css),
        )
        .mount(server)
        .await;
}

/// Starts the API on an ephemeral port and returns its base URL.
#[allow(dead_code)]
pub async fn spawn_api(config: Config) -> String {
    let state = AppState {
        client: Arc::new(test_client()),
        config: Arc::new(config),
    };
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router(state))
            .await
            .expect("Test server failed");
    });
    format!("http://{}", addr)
}
