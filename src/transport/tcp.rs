//! TCP Transport
//!
//! Owns one outbound TCP connection to the bridge.

use std::io::{Read, Write};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

use bytes::Bytes;

use crate::config::ClientConfig;
use crate::error::{OneWireError, Result};
use crate::transport::Transport;

/// Blocking TCP transport to the bridge
///
/// Single use: once closed (or once the peer hangs up) the transport stays
/// unusable and a new one must be constructed.
pub struct TcpTransport {
    /// The connection; `None` after close
    stream: Option<TcpStream>,

    /// Receive buffer capacity per call
    recv_buffer_size: usize,

    /// Peer address for logging
    peer_addr: String,
}

impl TcpTransport {
    /// Connect to the bridge described by `config`.
    ///
    /// Fails with [`OneWireError::Connect`] if the address is invalid, the
    /// host is unreachable, or the connection is refused. There is no
    /// silently-unusable state: a constructed transport is a connected one.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let addr = config.addr();

        let stream = TcpStream::connect(&addr).map_err(|source| OneWireError::Connect {
            addr: addr.clone(),
            source,
        })?;

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        if config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
        }
        if config.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))?;
        }

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| addr.clone());

        tracing::debug!("Connected to bridge at {}", peer_addr);

        Ok(Self {
            stream: Some(stream),
            recv_buffer_size: config.recv_buffer_size,
            peer_addr,
        })
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    fn stream_mut(&mut self) -> Result<&mut TcpStream> {
        self.stream.as_mut().ok_or(OneWireError::NotConnected)
    }
}

impl Transport for TcpTransport {
    fn send(&mut self, message: &str) -> Result<()> {
        let stream = self.stream_mut()?;
        stream.write_all(message.as_bytes())?;
        stream.flush()?;
        Ok(())
    }

    fn receive(&mut self) -> Result<Bytes> {
        let buffer_size = self.recv_buffer_size;
        let stream = self.stream_mut()?;

        let mut buffer = vec![0u8; buffer_size];
        let n = stream.read(&mut buffer)?;

        if n == 0 {
            // Peer closed the connection gracefully
            return Err(OneWireError::ConnectionClosed);
        }

        buffer.truncate(n);
        Ok(Bytes::from(buffer))
    }

    fn close(&mut self) -> Result<()> {
        if let Some(stream) = self.stream.take() {
            tracing::debug!("Closing connection to {}", self.peer_addr);
            // The peer may already be gone; a failed shutdown still leaves
            // the transport closed.
            let _ = stream.shutdown(Shutdown::Both);
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}

impl Drop for TcpTransport {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
