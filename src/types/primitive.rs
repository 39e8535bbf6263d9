//! Little-endian primitive readers
//!
//! Each reader takes a window of exactly its own width. A window of any other
//! length is rejected with [`DecodeError::WindowSize`] instead of being read
//! past its end or silently padded.

use crate::{DecodeError, Result};

fn check_window(reader: &'static str, window: &[u8], expected: usize) -> Result<()> {
    if window.len() != expected {
        return Err(DecodeError::window_size(reader, expected, window.len()));
    }
    Ok(())
}

/// Read an unsigned 8-bit value.
pub fn read_uint8(window: &[u8]) -> Result<u8> {
    check_window("read_uint8", window, 1)?;
    Ok(window[0])
}

/// Read a signed 8-bit value (two's complement).
pub fn read_int8(window: &[u8]) -> Result<i8> {
    check_window("read_int8", window, 1)?;
    let raw = window[0] as i16;
    let value = if raw > 0x7F { raw - 0x100 } else { raw };
    Ok(value as i8)
}

/// Read an unsigned 16-bit little-endian value.
pub fn read_uint16_le(window: &[u8]) -> Result<u16> {
    check_window("read_uint16_le", window, 2)?;
    Ok(((window[1] as u16) << 8) | window[0] as u16)
}

/// Read a signed 16-bit little-endian value (two's complement).
pub fn read_int16_le(window: &[u8]) -> Result<i16> {
    check_window("read_int16_le", window, 2)?;
    let raw = (((window[1] as u16) << 8) | window[0] as u16) as i32;
    let value = if raw > 0x7FFF { raw - 0x1_0000 } else { raw };
    Ok(value as i16)
}

/// Read an unsigned 32-bit little-endian value.
pub fn read_uint32_le(window: &[u8]) -> Result<u32> {
    check_window("read_uint32_le", window, 4)?;
    Ok(((window[3] as u32) << 24)
        | ((window[2] as u32) << 16)
        | ((window[1] as u32) << 8)
        | window[0] as u32)
}

/// Read a signed 32-bit little-endian value (two's complement).
pub fn read_int32_le(window: &[u8]) -> Result<i32> {
    check_window("read_int32_le", window, 4)?;
    let raw = (((window[3] as u32) << 24)
        | ((window[2] as u32) << 16)
        | ((window[1] as u32) << 8)
        | window[0] as u32) as i64;
    let value = if raw > 0x7FFF_FFFF { raw - 0x1_0000_0000 } else { raw };
    Ok(value as i32)
}

/// Read a single-precision float from its little-endian bit pattern.
///
/// The value is rebuilt from sign, exponent and mantissa rather than through
/// `f32::from_bits`. A zero exponent is treated as subnormal (mantissa shifted
/// left by one, no implicit bit). The all-ones exponent is not special-cased,
/// so the result is always finite.
pub fn read_float_le(window: &[u8]) -> Result<f64> {
    check_window("read_float_le", window, 4)?;
    let bits = read_uint32_le(window)?;

    let sign = if bits >> 31 == 0 { 1.0 } else { -1.0 };
    let exponent = ((bits >> 23) & 0xFF) as i32;
    let mantissa = if exponent == 0 {
        (bits & 0x7F_FFFF) << 1
    } else {
        (bits & 0x7F_FFFF) | 0x80_0000
    };

    Ok(sign * mantissa as f64 * 2f64.powi(exponent - 150))
}

/// Types that can be read from a fixed-width little-endian window.
pub trait Primitive: Sized {
    /// Exact window width in bytes.
    const WIDTH: usize;

    /// Read this type from a window of exactly [`Self::WIDTH`] bytes.
    fn read(window: &[u8]) -> Result<Self>;

    /// Read this type from `data` starting at `offset`.
    fn read_at(data: &[u8], offset: usize) -> Result<Self> {
        let end = offset.saturating_add(Self::WIDTH);
        let window = data.get(offset..end).unwrap_or(&data[data.len().min(offset)..]);
        Self::read(window)
    }
}

impl Primitive for u8 {
    const WIDTH: usize = 1;

    fn read(window: &[u8]) -> Result<Self> {
        read_uint8(window)
    }
}

impl Primitive for i8 {
    const WIDTH: usize = 1;

    fn read(window: &[u8]) -> Result<Self> {
        read_int8(window)
    }
}

impl Primitive for u16 {
    const WIDTH: usize = 2;

    fn read(window: &[u8]) -> Result<Self> {
        read_uint16_le(window)
    }
}

impl Primitive for i16 {
    const WIDTH: usize = 2;

    fn read(window: &[u8]) -> Result<Self> {
        read_int16_le(window)
    }
}

impl Primitive for u32 {
    const WIDTH: usize = 4;

    fn read(window: &[u8]) -> Result<Self> {
        read_uint32_le(window)
    }
}

impl Primitive for i32 {
    const WIDTH: usize = 4;

    fn read(window: &[u8]) -> Result<Self> {
        read_int32_le(window)
    }
}

/// `f64` is the widened result of the 32-bit [`read_float_le`]; it reads a
/// 4-byte IEEE single, not an 8-byte double.
impl Primitive for f64 {
    const WIDTH: usize = 4;

    fn read(window: &[u8]) -> Result<Self> {
        read_float_le(window)
    }
}
