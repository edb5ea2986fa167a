//! Temperature Decoding Tests
//!
//! Tests for the fixed-point conversion-result decoder.

use onewire_client::{decode_temperature, OneWireError};

// =============================================================================
// Decoding Identity Tests
// =============================================================================

#[test]
fn test_decode_all_byte_pairs() {
    // The decoder must reproduce ((b1 << 8) | b0) / 16.0 exactly for the
    // full unsigned byte domain
    for b1 in 0..=255u16 {
        for b0 in 0..=255u16 {
            let expected = f64::from((b1 << 8) | b0) / 16.0;
            let decoded = decode_temperature(&[b0 as u8, b1 as u8]).unwrap();
            assert_eq!(decoded, expected, "b0={b0} b1={b1}");
        }
    }
}

#[test]
fn test_decode_known_reading() {
    // b0=0x10(16), b1=0x01(1) -> (1 << 8) + 16 = 272 -> 272 / 16 = 17.0
    let temperature = decode_temperature(&[0x10, 0x01]).unwrap();
    assert_eq!(temperature, 17.0);
}

#[test]
fn test_decode_zero_reading() {
    let temperature = decode_temperature(&[0x00, 0x00]).unwrap();
    assert_eq!(temperature, 0.0);
}

#[test]
fn test_decode_fractional_reading() {
    // 0x0191 = 401 -> 25.0625 °C
    let temperature = decode_temperature(&[0x91, 0x01]).unwrap();
    assert_eq!(temperature, 25.0625);
}

#[test]
fn test_decode_is_little_endian() {
    // Swapping the bytes must change the value
    let low_first = decode_temperature(&[0x10, 0x01]).unwrap();
    let high_first = decode_temperature(&[0x01, 0x10]).unwrap();
    assert_ne!(low_first, high_first);
    assert_eq!(high_first, f64::from((0x10u16 << 8) | 0x01) / 16.0);
}

#[test]
fn test_decode_ignores_trailing_bytes() {
    // A full 9-byte scratchpad reply (registers + CRC) decodes from the
    // first two bytes only
    let scratchpad = [0x91, 0x01, 0x4B, 0x46, 0x7F, 0xFF, 0x0F, 0x10, 0xD0];
    let temperature = decode_temperature(&scratchpad).unwrap();
    assert_eq!(temperature, 25.0625);
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[test]
fn test_decode_empty_reply() {
    let result = decode_temperature(&[]);
    match result {
        Err(OneWireError::MalformedResponse { expected, actual }) => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 0);
        }
        other => panic!("Expected MalformedResponse, got {other:?}"),
    }
}

#[test]
fn test_decode_single_byte_reply() {
    let result = decode_temperature(&[0x42]);
    match result {
        Err(OneWireError::MalformedResponse { expected, actual }) => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("Expected MalformedResponse, got {other:?}"),
    }
}
