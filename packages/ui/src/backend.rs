//! Shared backend constructor for all apps.

use client::{ApiConfig, HttpBackend};

/// HTTP backend against the configured API base URL.
pub fn make_backend() -> HttpBackend {
    HttpBackend::new(ApiConfig::default())
}
