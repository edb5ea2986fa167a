//! Temperature decoding
//!
//! The `RS` reply carries the sensor's conversion result in its first two
//! bytes: a little-endian fixed-point value with 4 fractional bits, so one
//! unit is 1/16 °C. The remaining reply bytes (scratchpad registers, CRC)
//! are not interpreted by this client.

use crate::error::{OneWireError, Result};

/// Fixed-point scale of the conversion result: units per °C
pub const TEMPERATURE_SCALE: f64 = 16.0;

/// Minimum reply length carrying a complete reading
const MIN_REPLY_LEN: usize = 2;

/// Decode a temperature from an `RS` reply.
///
/// Reads `b0` (low byte) and `b1` (high byte) from the start of `reply` and
/// computes `((b1 << 8) | b0) / 16.0`. The value is taken as unsigned; the
/// bridge does not sign-extend the 12-bit register.
///
/// Fails with [`OneWireError::MalformedResponse`] if the reply holds fewer
/// than 2 bytes. Never reads past the reading itself.
pub fn decode_temperature(reply: &[u8]) -> Result<f64> {
    if reply.len() < MIN_REPLY_LEN {
        return Err(OneWireError::MalformedResponse {
            expected: MIN_REPLY_LEN,
            actual: reply.len(),
        });
    }

    let raw = u16::from_le_bytes([reply[0], reply[1]]);

    Ok(f64::from(raw) / TEMPERATURE_SCALE)
}
