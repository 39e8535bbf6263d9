//! Port 99 telemetry frame layout
//!
//! The header packs sensor state at sub-byte granularity to keep airtime low.
//! Byte indices and bit positions are the device's wire contract.

use tracing::trace;

use super::playback;
use crate::types::{read_int16_le, read_uint16_le};
use crate::{DecodedTelemetry, DecoderConfig, Result};

/// Bytes read for the sensor header and current position.
pub const HEADER_LEN: usize = 11;

/// Offset added to both packed solar voltage fields.
pub const VOLTAGE_OFFSET: u8 = 18;

/// Multiplier applied to the packed pressure field.
pub const PRESSURE_SCALE: u16 = 10;

pub mod bits {
    pub const NOLOAD_VOLTAGE_SHIFT: u8 = 3;
    pub const NOLOAD_VOLTAGE_MASK: u8 = 0x1F;
    pub const LOAD_VOLTAGE_HIGH_MASK: u8 = 0x1C;
    pub const LOAD_VOLTAGE_LOW_SHIFT: u8 = 6;
    pub const LOAD_VOLTAGE_LOW_MASK: u8 = 0x03;
    pub const DAYS_OF_PLAYBACK_MASK: u8 = 0x3F;
    pub const PRESSURE_SHIFT: u8 = 1;
    pub const PRESSURE_MASK: u8 = 0x7F;
    pub const APP_ACK_MASK: u8 = 0x01;
    pub const SATS_SHIFT: u8 = 3;
    pub const SATS_MASK: u8 = 0x1F;
    pub const RESET_CNT_MASK: u8 = 0x07;
}

/// Convert a packed 16-bit coordinate to degrees.
///
/// The device keeps the top 16 bits of a 1e-7 degree value. Multiplying by
/// 0xFFFF rather than 0x10000 matches deployed backends exactly.
pub fn scale_coordinate(raw: i16) -> f64 {
    raw as f64 * 65535.0 / 1e7
}

/// Decode a frame already known to be at least [`HEADER_LEN`] bytes.
pub(super) fn decode(bytes: &[u8], config: &DecoderConfig) -> Result<DecodedTelemetry> {
    trace!(len = bytes.len(), "Decoding telemetry frame");

    let (b0, b1, b2, b3, b4) = (bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]);

    let noload_voltage =
        ((b0 >> bits::NOLOAD_VOLTAGE_SHIFT) & bits::NOLOAD_VOLTAGE_MASK) + VOLTAGE_OFFSET;
    let load_voltage = (((b0 << 2) & bits::LOAD_VOLTAGE_HIGH_MASK)
        | ((b1 >> bits::LOAD_VOLTAGE_LOW_SHIFT) & bits::LOAD_VOLTAGE_LOW_MASK))
        + VOLTAGE_OFFSET;
    let days_of_playback = b1 & bits::DAYS_OF_PLAYBACK_MASK;

    let pressure = ((b2 >> bits::PRESSURE_SHIFT) & bits::PRESSURE_MASK) as u16 * PRESSURE_SCALE;
    let app_ack = (b2 & bits::APP_ACK_MASK) != 0;

    let sats = (b3 >> bits::SATS_SHIFT) & bits::SATS_MASK;
    let reset_cnt = b3 & bits::RESET_CNT_MASK;

    // 16-bit read over a single byte: the high byte is absent on the wire and reads as zero.
    let board_temp = read_int16_le(&[b4, 0])?;

    let latitude = scale_coordinate(read_int16_le(&bytes[5..7])?);
    let longitude = scale_coordinate(read_int16_le(&bytes[7..9])?);
    let altitude = read_uint16_le(&bytes[9..11])?;

    let past_positions = if config.decode_playback {
        playback::decode_records(&bytes[HEADER_LEN..], config.playback_epoch)?
    } else {
        Vec::new()
    };

    Ok(DecodedTelemetry {
        longitude,
        latitude,
        altitude,
        sats,
        pressure,
        app_ack,
        reset_cnt,
        board_temp,
        noload_voltage,
        load_voltage,
        days_of_playback,
        past_positions,
    })
}
