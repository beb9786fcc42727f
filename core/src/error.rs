//! Error types for the API client.
//!
//! # Design
//! The error set is deliberately closed: every failure inside
//! `ApiClient::perform_request` maps to exactly one of these four variants
//! before it crosses the crate boundary, so callers can exhaustively match
//! without handling raw transport or serde errors. `InvalidResponse` carries
//! the real status code because callers frequently branch on specific codes
//! (404 vs 500).

use thiserror::Error;

/// Errors returned by `ApiClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request path could not be resolved into an absolute URL against
    /// the client's base URL. Detected before any network activity.
    #[error("invalid URL: path could not be resolved against the base URL")]
    InvalidUrl,

    /// The transport succeeded but the server answered with a status outside
    /// the 2xx range. The body is never decoded in this case.
    #[error("invalid response: HTTP status {0}")]
    InvalidResponse(u16),

    /// The server answered 2xx but the body could not be deserialized into
    /// the requested type — a client/server contract mismatch.
    #[error("decoding failed: {0}")]
    Decoding(String),

    /// The transport itself failed: DNS, connection refusal, TLS, timeout,
    /// cancellation. Carries the transport's own description.
    #[error("network failure: {0}")]
    Network(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
