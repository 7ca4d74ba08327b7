//! Error types for crudkit
//!
//! The library deliberately has almost no failure surface of its own: the
//! only error it can originate is a payload (de)serialization failure at the
//! generic boundary. Everything else is whatever the injected transport
//! reports, carried through unchanged.

use thiserror::Error;

/// Result type alias for operations that can fail with a crudkit error.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for CRUD service operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Payload serialization or response deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure reported by the injected transport, passed through as-is.
    ///
    /// The library performs no retries, no wrapping, and no translation;
    /// the transport's own failure semantics are the caller-visible ones.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}
