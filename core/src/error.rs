//! Error types for the registro API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the record does not exist" from "the server returned an unexpected
//! status." Transport failures surface as `Network` so the store can treat
//! connectivity and HTTP-level problems through one type. The store reduces
//! all of these to generic user-facing messages; the variants here carry the
//! detail that goes to the log.

use thiserror::Error;

/// Errors produced by `RegistroClient` parse methods and by
/// [`Transport`](crate::transport::Transport) implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested record does not exist.
    #[error("record not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never completed (DNS, connect, or read failure).
    #[error("network error: {0}")]
    Network(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
