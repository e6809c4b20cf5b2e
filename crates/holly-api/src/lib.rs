//! # holly-api
//!
//! HTTP client for the remote post store backing the shared tree: a
//! spreadsheet-as-database web app exposing action-based GET/POST operations
//! (`getPostList`, `getComments`, `getInterestRanking`, `savePost`,
//! `saveComment`). This crate also adapts the store's generic post records
//! into domain objects, including the `|||` metadata side channel that
//! layers ornament placement data on top of flat post rows.
//!
//! Failure semantics are deliberately thin: every call is a single attempt
//! with no retry or backoff; callers decide whether to degrade a failed
//! read to an empty result.

pub mod comments;
pub mod posts;
pub mod ranking;

mod dto;
mod error;
mod http;

pub use comments::CommentOutcome;
pub use error::ApiError;

use std::time::Duration;

/// HTTP client bound to one deployed post store endpoint.
pub struct SheetClient {
    http: reqwest::Client,
    base_url: String,
}

impl SheetClient {
    /// Create a client for the given web app exec URL.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("hollytree/0.1")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.into(),
        }
    }

    /// GET `{base}?action={action}` with an optional JSON `data` parameter.
    pub(crate) fn action_url(&self, action: &str, data: Option<&str>) -> String {
        match data {
            Some(data) => format!(
                "{}?action={action}&data={}",
                self.base_url,
                urlencoding::encode(data)
            ),
            None => format!("{}?action={action}", self.base_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn action_url_without_data() {
        let client = SheetClient::new("https://example.com/exec", Duration::from_secs(10));
        assert_eq!(
            client.action_url("getPostList", None),
            "https://example.com/exec?action=getPostList"
        );
    }

    #[test]
    fn action_url_encodes_data() {
        let client = SheetClient::new("https://example.com/exec", Duration::from_secs(10));
        let url = client.action_url("getComments", Some(r#"{"postId":"12"}"#));
        assert_eq!(
            url,
            "https://example.com/exec?action=getComments&data=%7B%22postId%22%3A%2212%22%7D"
        );
    }
}
