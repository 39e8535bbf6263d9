//! Payload schemas keyed by frame port.
//!
//! The port→schema mapping is a closed enum. Supporting a new port means
//! adding a [`PayloadSchema`] variant, a match arm in [`PayloadSchema::for_port`]
//! and a module that decodes its layout.
//!
//! Currently only [`TELEMETRY_PORT`] (99) has a schema:
//!
//! ```text
//! byte 0   noload voltage (5 bits) | load voltage high (3 bits)
//! byte 1   load voltage low (2 bits) | days of playback (6 bits)
//! byte 2   pressure (7 bits) | app ack (1 bit)
//! byte 3   sats (5 bits) | reset count (3 bits)
//! byte 4   board temperature
//! 5..7     latitude  (i16 LE)
//! 7..9     longitude (i16 LE)
//! 9..11    altitude  (u16 LE)
//! 11..     playback records, 9 bytes each
//! ```

pub mod playback;
pub mod telemetry;

use crate::{DecodeError, DecodedTelemetry, DecoderConfig, Result};

/// Port carrying the tracker's telemetry frame.
pub const TELEMETRY_PORT: u32 = 99;

/// Known payload layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSchema {
    /// Sensor header, current position and playback records
    Telemetry,
}

impl PayloadSchema {
    /// Look up the schema for a port.
    pub fn for_port(port: u32) -> Option<Self> {
        match port {
            TELEMETRY_PORT => Some(PayloadSchema::Telemetry),
            _ => None,
        }
    }

    /// Port this schema is decoded on.
    pub const fn port(self) -> u32 {
        match self {
            PayloadSchema::Telemetry => TELEMETRY_PORT,
        }
    }

    /// Minimum frame length this schema reads.
    pub const fn min_len(self) -> usize {
        match self {
            PayloadSchema::Telemetry => telemetry::HEADER_LEN,
        }
    }

    /// Decode a frame with this schema.
    pub fn decode(self, bytes: &[u8], config: &DecoderConfig) -> Result<DecodedTelemetry> {
        if bytes.len() < self.min_len() {
            return Err(DecodeError::frame_too_short(self.port(), self.min_len(), bytes.len()));
        }

        match self {
            PayloadSchema::Telemetry => telemetry::decode(bytes, config),
        }
    }
}
