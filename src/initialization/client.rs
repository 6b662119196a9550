//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS};
use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - The page timeout from the configuration (stylesheet fetches set their own,
///   shorter, per-request timeout)
/// - Redirect following (up to `MAX_REDIRECT_HOPS`)
/// - Transparent gzip/brotli/deflate decoding
///
/// The client holds no per-audit state and is shared by every request handler.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(config.page_timeout)
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_default_config() {
        let client = init_client(&Config::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_init_client_rejects_invalid_user_agent() {
        let config = Config {
            user_agent: "bad\nagent".to_string(),
            ..Default::default()
        };
        assert!(init_client(&config).is_err());
    }
}
