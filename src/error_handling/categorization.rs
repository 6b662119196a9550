//! Error categorization.

use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ErrorType` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        return categorize_status(status.as_u16());
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_status() {
        ErrorType::HttpRequestStatusError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes a non-success HTTP status code.
pub fn categorize_status(status: u16) -> ErrorType {
    match status {
        403 => ErrorType::HttpRequestBotDetectionError,
        404 => ErrorType::HttpRequestNotFound,
        429 => ErrorType::HttpRequestTooManyRequests,
        500..=599 => ErrorType::HttpRequestServerError,
        _ => ErrorType::HttpRequestStatusError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_status_codes() {
        assert_eq!(categorize_status(403), ErrorType::HttpRequestBotDetectionError);
        assert_eq!(categorize_status(404), ErrorType::HttpRequestNotFound);
        assert_eq!(categorize_status(429), ErrorType::HttpRequestTooManyRequests);
        assert_eq!(categorize_status(502), ErrorType::HttpRequestServerError);
        assert_eq!(categorize_status(410), ErrorType::HttpRequestStatusError);
    }

    #[tokio::test]
    async fn test_categorize_connect_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(2))
            .build()
            .expect("client");
        let err = client
            .get("http://127.0.0.1:9/")
            .send()
            .await
            .expect_err("connection should be refused");
        let category = categorize_reqwest_error(&err);
        assert!(matches!(
            category,
            ErrorType::HttpRequestConnectError
                | ErrorType::HttpRequestRequestError
                | ErrorType::HttpRequestTimeoutError
        ));
    }
}
