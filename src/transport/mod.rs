//! Transport Module
//!
//! Blocking byte-level I/O over a single TCP connection.
//!
//! ## Architecture
//! - One outbound connection per transport instance
//! - Blocking send/receive, no background threads
//! - A closed transport is never reopened; construct a new one

mod tcp;

pub use tcp::TcpTransport;

use bytes::Bytes;

use crate::error::Result;

/// Blocking byte-level I/O over one established connection.
///
/// Implemented by [`TcpTransport`] for production use; tests substitute
/// scripted implementations to exercise the protocol client off the wire.
pub trait Transport {
    /// Write the message verbatim as UTF-8 bytes, blocking until fully written.
    fn send(&mut self, message: &str) -> Result<()>;

    /// Block until at least one byte is available and return whatever arrived,
    /// up to the receive buffer size.
    ///
    /// Returns [`OneWireError::ConnectionClosed`](crate::OneWireError::ConnectionClosed)
    /// if the peer closed the connection gracefully. A single call does not
    /// guarantee a complete logical reply; the protocol layer relies on the
    /// peer sending one bounded chunk per command.
    fn receive(&mut self) -> Result<Bytes>;

    /// Release the connection. Idempotent; all later operations fail with
    /// [`OneWireError::NotConnected`](crate::OneWireError::NotConnected).
    fn close(&mut self) -> Result<()>;

    /// Whether the connection is still open
    fn is_connected(&self) -> bool;
}
