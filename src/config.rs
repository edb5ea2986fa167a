//! Configuration for the OneWire client
//!
//! Centralized configuration with sensible defaults.

/// Default TCP port of the bridge server
pub const DEFAULT_PORT: u16 = 1033;

/// Default receive buffer size in bytes
///
/// The bridge sends one bounded reply chunk per command; replies never
/// exceed this size.
pub const DEFAULT_RECV_BUFFER_SIZE: usize = 1024;

/// Main configuration for a OneWire client instance
#[derive(Debug, Clone)]
pub struct ClientConfig {
    // -------------------------------------------------------------------------
    // Connection Configuration
    // -------------------------------------------------------------------------
    /// Hostname or IP address of the bridge
    pub host: String,

    /// TCP port of the bridge
    pub port: u16,

    // -------------------------------------------------------------------------
    // Transport Configuration
    // -------------------------------------------------------------------------
    /// Read timeout in milliseconds (0 = block indefinitely)
    pub read_timeout_ms: u64,

    /// Write timeout in milliseconds (0 = block indefinitely)
    pub write_timeout_ms: u64,

    /// Maximum number of bytes accepted per receive call
    pub recv_buffer_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            read_timeout_ms: 5000,
            write_timeout_ms: 5000,
            recv_buffer_size: DEFAULT_RECV_BUFFER_SIZE,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// The `host:port` address string used for connecting
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builder for ClientConfig
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the bridge hostname or IP address
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the bridge TCP port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the read timeout (in milliseconds, 0 disables the timeout)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds, 0 disables the timeout)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the receive buffer size (in bytes)
    pub fn recv_buffer_size(mut self, size: usize) -> Self {
        self.config.recv_buffer_size = size;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
