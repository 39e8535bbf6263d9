//! Core types for uplink decoding.
//!
//! - [`Primitive`] and the `read_*` functions turn fixed-width little-endian
//!   windows into numbers
//! - [`DecodedTelemetry`] and [`PlaybackFix`] hold decoded measurements
//! - [`UplinkRequest`] and [`UplinkResponse`] are the request-object call shape
//!
//! ## Usage Example
//!
//! ```rust
//! use pico_uplink::types::{read_int16_le, read_uint16_le, Primitive};
//!
//! let window: [u8; 2] = [0xFE, 0xFF];
//! assert_eq!(read_uint16_le(&window).unwrap(), 0xFFFE);
//! assert_eq!(read_int16_le(&window).unwrap(), -2);
//!
//! let frame: [u8; 3] = [0x00, 0x34, 0x12];
//! assert_eq!(u16::read_at(&frame, 1).unwrap(), 0x1234);
//! ```

mod primitive;
mod telemetry;
mod uplink;

pub use primitive::{
    Primitive, read_float_le, read_int8, read_int16_le, read_int32_le, read_uint8,
    read_uint16_le, read_uint32_le,
};
pub use telemetry::{DecodedTelemetry, PlaybackFix};
pub use uplink::{UplinkRequest, UplinkResponse};
