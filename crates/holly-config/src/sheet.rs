//! Remote post store (Google Apps Script web app) configuration.

use serde::{Deserialize, Serialize};

/// The deployed Apps Script web app endpoint.
const DEFAULT_SHEET_URL: &str = "https://script.google.com/macros/s/AKfycbyvbLW5WgbxUCbNVw4EpETNotU25LD8YjikIDVSUCJySiBFICBjKbxFgDz6M5hen83u4g/exec";

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

fn default_url() -> String {
    DEFAULT_SHEET_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SheetConfig {
    /// The web app exec URL all actions are sent to.
    #[serde(default = "default_url")]
    pub url: String,

    /// Per-request timeout applied to the HTTP client.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SheetConfig {
    /// Whether an endpoint URL is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
