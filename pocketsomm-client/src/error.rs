//! Error types for the PocketSomm client.

use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur when interacting with the PocketSomm API.
///
/// The `Display` text of every variant is suitable for showing to an end
/// user. Internals such as decode positions or raw bodies are carried in
/// fields or `source()` for diagnostics, never in the rendered message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client configuration is unusable, detected before any request
    /// is attempted.
    #[error("invalid API configuration: {0}")]
    Config(String),

    /// The request was rejected client-side; no network traffic happened.
    #[error("{0}")]
    InvalidRequest(String),

    /// The request never produced an HTTP status: DNS failure, refused
    /// connection, timeout, TLS error.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered non-2xx with a structured error envelope; the
    /// message is reported verbatim.
    #[error("{message}")]
    Server {
        /// Error code reported by the backend.
        code: i64,
        /// Human-readable message reported by the backend.
        message: String,
        /// Optional field-level details.
        details: Option<BTreeMap<String, String>>,
    },

    /// The server answered non-2xx without a recognizable error envelope.
    #[error("Server error (HTTP {status})")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The raw response body, kept for diagnostics.
        body: String,
    },

    /// A 2xx body did not decode into the expected payload in any
    /// accepted shape.
    #[error("Unexpected server response")]
    Decode(#[source] serde_json::Error),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
