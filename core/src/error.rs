//! Error types for the comments API client.
//!
//! # Design
//! `Validation` never reaches the network. `NotFound` gets its own variant
//! because a stale id is the common failure for edit and delete. Every other
//! non-2xx response lands in `HttpError` with the raw status and body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The comment text was empty after trimming.
    #[error("comment text cannot be empty")]
    Validation,

    /// The request never produced a response (unreachable host, reset...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
