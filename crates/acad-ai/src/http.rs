//! Shared HTTP response helpers for the AI client.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`AiError::Api`]) so the client stays focused on
//! request construction and response mapping.

use serde::Deserialize;

use crate::error::AiError;

/// Error envelope returned by the Gemini REST API.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`AiError::RateLimited`] with `Retry-After`
///   header parsing (falls back to 60 s if absent or unparseable).
/// - **Non-success status** → [`AiError::Api`] with the status code and the
///   service's error message (or the raw body when it has none).
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AiError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(AiError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(AiError::Api {
            status,
            message: error_message(&body),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", value)
                .body(String::new())
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        assert_eq!(parse_retry_after(&mock_response_with_retry_after("120")), 120);
    }

    #[test]
    fn parse_retry_after_fallbacks() {
        assert_eq!(parse_retry_after(&mock_response(429, "")), 60);
        assert_eq!(
            parse_retry_after(&mock_response_with_retry_after("soon")),
            60
        );
    }

    #[tokio::test]
    async fn rate_limited_with_header() {
        let err = check_response(mock_response_with_retry_after("30"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AiError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn api_error_uses_service_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        let err = check_response(mock_response(400, body)).await.unwrap_err();
        match err {
            AiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn api_error_falls_back_to_raw_body() {
        let err = check_response(mock_response(503, "upstream unavailable"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, AiError::Api { status: 503, ref message } if message == "upstream unavailable")
        );
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(mock_response(200, "{}")).await.is_ok());
    }
}
