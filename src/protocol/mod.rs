//! Protocol Module
//!
//! Defines the command set of the bridge and the response decoding.
//!
//! ## Wire Protocol (plain ASCII over TCP, no framing)
//!
//! | Command | Purpose                                | Reply consumed            |
//! |---------|----------------------------------------|---------------------------|
//! | `FLUSH` | Discard stale bytes on the remote side | none                      |
//! | `RA`    | Read the device ROM ID                 | raw bytes, verbatim       |
//! | `CT`    | Trigger a temperature conversion       | raw bytes (logged only)   |
//! | `RS`    | Read the scratchpad (conversion result)| first 2 bytes = reading   |
//! | `ECRC`  | Enable remote CRC checking             | raw bytes (logged only)   |
//! | `DCRC`  | Disable remote CRC checking            | raw bytes (logged only)   |
//!
//! The `RS` reply carries the temperature in its first two bytes as a
//! little-endian 12-bit fixed-point value, 1/16 °C per unit.

mod client;
mod command;
mod temperature;

pub use client::{OneWireClient, TraceFn};
pub use command::Command;
pub use temperature::{decode_temperature, TEMPERATURE_SCALE};
