//! Type-safe decoder for pico balloon tracker uplink frames.
//!
//! The tracker packs its sensor state, current GPS fix and a set of replayed
//! historical fixes into a compact LoRaWAN payload. This crate turns those raw
//! bytes back into named measurements.
//!
//! # Features
//!
//! - **Bit-exact decoding** of the port 99 telemetry layout
//! - **Playback records**: historical fixes with absolute timestamps
//! - **Explicit errors**: unknown ports and short frames are values, never panics
//! - **Two call shapes**: raw bytes plus port, or a serde request object
//!
//! # Quick Start
//!
//! ```rust
//! use pico_uplink::{decode, decode_uplink, UplinkRequest};
//!
//! let bytes = [0x00, 0x00, 0x01, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
//!
//! let telemetry = decode(&bytes, 99).unwrap();
//! assert_eq!(telemetry.sats, 1);
//! assert!(telemetry.app_ack);
//!
//! let response = decode_uplink(&UplinkRequest::new(bytes, 12));
//! assert_eq!(response.errors(), ["Unknown FPort - see device manual!".to_string()]);
//! ```
//!
//! Use a [`Decoder`] when the defaults in [`DecoderConfig`] don't fit:
//!
//! ```rust
//! use pico_uplink::{Decoder, DecoderConfig};
//!
//! let config = DecoderConfig::from_yaml_str("decode_playback: false").unwrap();
//! let decoder = Decoder::new(config);
//! # let bytes = [0u8; 20];
//! assert!(decoder.decode(&bytes, 99).unwrap().past_positions.is_empty());
//! ```

pub mod config;
pub mod decoder;
mod error;
pub mod schema;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

pub use config::DecoderConfig;
pub use decoder::Decoder;
pub use error::*;
pub use schema::{PayloadSchema, TELEMETRY_PORT};
pub use types::{DecodedTelemetry, PlaybackFix, UplinkRequest, UplinkResponse};

/// Decode raw frame bytes received on `port` with the default configuration.
pub fn decode(bytes: &[u8], port: u32) -> Result<DecodedTelemetry> {
    Decoder::default().decode(bytes, port)
}

/// Decode a `{ bytes, fPort }` request object with the default configuration.
pub fn decode_uplink(request: &UplinkRequest) -> UplinkResponse {
    Decoder::default().decode_request(request)
}
