//! Command definitions
//!
//! The fixed set of ASCII tokens accepted by the bridge. Commands are
//! stateless; they are transmitted verbatim and never stored.

use std::fmt;

/// A command understood by the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Discard stale buffered bytes on the remote side
    Flush,

    /// Read the device ROM ID
    ReadAddress,

    /// Trigger a temperature conversion
    ConvertTemperature,

    /// Read the scratchpad holding the conversion result
    ReadScratchpad,

    /// Enable CRC checking in the remote driver
    EnableCrc,

    /// Disable CRC checking in the remote driver
    DisableCrc,
}

impl Command {
    /// The ASCII token sent over the wire
    pub fn token(&self) -> &'static str {
        match self {
            Command::Flush => "FLUSH",
            Command::ReadAddress => "RA",
            Command::ConvertTemperature => "CT",
            Command::ReadScratchpad => "RS",
            Command::EnableCrc => "ECRC",
            Command::DisableCrc => "DCRC",
        }
    }

    /// The CRC toggle command for the given state
    pub fn crc_toggle(enabled: bool) -> Self {
        if enabled {
            Command::EnableCrc
        } else {
            Command::DisableCrc
        }
    }

    /// Whether the bridge sends a reply the client must consume.
    ///
    /// `FLUSH` is the only command without one.
    pub fn expects_reply(&self) -> bool {
        !matches!(self, Command::Flush)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
