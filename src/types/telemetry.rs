//! Decoded telemetry records

use serde::{Deserialize, Serialize};

/// Measurements carried by one tracker uplink frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
pub struct DecodedTelemetry {
    /// Degrees
    pub longitude: f64,
    /// Degrees
    pub latitude: f64,
    /// Meters
    pub altitude: u16,
    /// Satellites in the GPS fix (0-31)
    pub sats: u8,
    /// Raw 7-bit pressure reading scaled by 10
    pub pressure: u16,
    /// Set when the device acknowledged a downlink from the application
    pub app_ack: bool,
    /// Reset counter, wraps at 8
    pub reset_cnt: u8,
    /// Single wire byte read as a 16-bit value, so always 0..=255
    pub board_temp: i16,
    /// Solar voltage without load (raw + 18)
    pub noload_voltage: u8,
    /// Solar voltage with the GPS load enabled (raw + 18)
    pub load_voltage: u8,
    /// Days of position history held on the device (0-63)
    pub days_of_playback: u8,
    /// Historical fixes replayed after the current position
    #[serde(default)]
    pub past_positions: Vec<PlaybackFix>,
}

/// A stored position/time fix re-sent by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
pub struct PlaybackFix {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: u16,
    /// 24-bit minute counter since the playback epoch
    pub minutes_since_epoch: u32,
    /// Unix time in seconds
    pub timestamp: u64,
}
