//! Backend endpoint configuration.

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.forgepoint.dev";

/// Where the content API lives.
///
/// The default points at production; set `FORGEPOINT_API_BASE` at build time
/// to target a staging or local backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("FORGEPOINT_API_BASE")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}
