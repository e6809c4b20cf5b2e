//! Envelope handling for post store responses.
//!
//! Every store action answers `{success, data?, message?}` on an HTTP 200;
//! only transport-level failures (rate limiting, non-success status codes)
//! surface as plain HTTP errors. The helpers here unwrap that envelope in
//! one place so the per-action modules only map records into domain types.

use serde::de::DeserializeOwned;

use crate::dto::Envelope;
use crate::error::ApiError;

/// Parse a response into its raw envelope, success flag included.
///
/// Write paths use this directly because the store reports user-facing
/// rejections (a deleted card, say) as `{"success": false}` bodies.
///
/// # Errors
///
/// Returns [`ApiError::RateLimited`] on a 429 (with `Retry-After` parsed,
/// defaulting to 60 s), [`ApiError::Api`] on any other non-success status,
/// and [`ApiError::Http`] if the body is not a valid envelope.
pub(crate) async fn read_envelope<T>(resp: reqwest::Response) -> Result<Envelope<T>, ApiError>
where
    T: DeserializeOwned + Default,
{
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or(60);
        return Err(ApiError::RateLimited { retry_after_secs });
    }
    if !status.is_success() {
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp.json().await?)
}

/// Unwrap a response down to the envelope's `data` payload.
///
/// A `{"success": false}` envelope becomes [`ApiError::Unsuccessful`] with
/// the store's message; a successful envelope with no `data` field yields
/// the payload's default (an empty list for the record collections).
///
/// # Errors
///
/// Everything [`read_envelope`] returns, plus [`ApiError::Unsuccessful`].
pub(crate) async fn expect_data<T>(resp: reqwest::Response) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let envelope = read_envelope::<T>(resp).await?;
    if !envelope.success {
        return Err(ApiError::Unsuccessful {
            message: envelope.message.unwrap_or_default(),
        });
    }
    Ok(envelope.data.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(::http::Response::builder().status(status).body(body).unwrap())
    }

    #[tokio::test]
    async fn expect_data_unwraps_the_payload() {
        let resp = response(200, r#"{"success": true, "data": [1, 2, 3]}"#);
        let data: Vec<u32> = expect_data(resp).await.unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn missing_data_on_success_yields_the_default() {
        let resp = response(200, r#"{"success": true}"#);
        let data: Vec<u32> = expect_data(resp).await.unwrap();
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn unsuccessful_envelope_carries_the_store_message() {
        let resp = response(200, r#"{"success": false, "message": "삭제된 게시물입니다"}"#);
        let err = expect_data::<Vec<u32>>(resp).await.unwrap_err();
        match err {
            ApiError::Unsuccessful { message } => assert_eq!(message, "삭제된 게시물입니다"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn read_envelope_keeps_the_success_flag() {
        let resp = response(200, r#"{"success": false, "message": "nope"}"#);
        let envelope: Envelope<serde_json::Value> = read_envelope(resp).await.unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("nope"));
    }

    #[tokio::test]
    async fn rate_limit_parses_retry_after() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", "30")
                .body("")
                .unwrap(),
        );
        let err = read_envelope::<serde_json::Value>(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn rate_limit_defaults_to_sixty_seconds() {
        let err = read_envelope::<serde_json::Value>(response(429, ""))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::RateLimited { retry_after_secs: 60 }));
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let err = read_envelope::<serde_json::Value>(response(500, "boom"))
            .await
            .unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
