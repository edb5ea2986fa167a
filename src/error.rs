//! Error types for the OneWire client
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using OneWireError
pub type Result<T> = std::result::Result<T, OneWireError>;

/// Unified error type for OneWire client operations
#[derive(Debug, Error)]
pub enum OneWireError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Connection to {addr} failed: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Not connected")]
    NotConnected,

    #[error("Connection closed by peer")]
    ConnectionClosed,

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Malformed response: expected at least {expected} bytes, got {actual}")]
    MalformedResponse { expected: usize, actual: usize },
}
