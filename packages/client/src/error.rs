use thiserror::Error;

/// Failures surfaced by the data layer.
///
/// Validation failures never reach this type — they are caught before any
/// request is issued. Every variant here is recoverable: the views show a
/// banner and return to an interactive state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The request never completed (DNS, connection, CORS, ...).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(String),
}
