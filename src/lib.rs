//! # OneWire Client
//!
//! A TCP client for a remote 1-Wire sensor bridge with:
//! - A plain ASCII command protocol (`FLUSH`, `RA`, `CT`, `RS`, `ECRC`, `DCRC`)
//! - Little-endian 12-bit fixed-point temperature decoding (1/16 °C per unit)
//! - Explicit, typed failure modes for every stage of the exchange
//! - An injectable trace callback for per-exchange observability
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Caller                                │
//! │              (CLI, polling loop, GUI, ...)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   OneWireClient                              │
//! │        (command sequencing + response decoding)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Transport                                 │
//! │          (blocking send/receive over one TCP                 │
//! │               connection to the bridge)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Protocol Contract
//!
//! The wire protocol has no framing or length prefix. The bridge is assumed
//! to send exactly one bounded reply chunk per command; `FLUSH` is issued
//! before each exchange to discard stale bytes left by a previous incomplete
//! read. This is a contract with the bridge, not a TCP guarantee.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod transport;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{OneWireError, Result};
pub use config::ClientConfig;
pub use transport::{TcpTransport, Transport};
pub use protocol::{decode_temperature, Command, OneWireClient};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
