//! Error types for the navi gateway.
//!
//! # Design
//! A failed call is a single kind of outcome for callers: the gateway logs it
//! and hands it back unchanged. The variants only record where the failure
//! surfaced (the wire, the status line, or the body) so the diagnostic is
//! useful. Payloads are owned strings, which keeps the error `Clone`.

use thiserror::Error;

/// Failure of a gateway call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be sent or the response body could not be read.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body is not valid JSON.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}

/// Errors produced while loading a `Config`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
