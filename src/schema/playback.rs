//! Playback records appended after the telemetry header
//!
//! Each record is a stored fix the tracker re-sends so that positions missed
//! while out of gateway range can be recovered later:
//!
//! | Offset | Field | Encoding |
//! |---|---|---|
//! | 0..2 | latitude | i16 LE, same scaling as the current position |
//! | 2..4 | longitude | i16 LE |
//! | 4..6 | altitude | u16 LE |
//! | 6..9 | minutes since epoch | 24-bit LE |

use tracing::debug;

use super::telemetry::scale_coordinate;
use crate::types::{read_int16_le, read_uint16_le, read_uint32_le};
use crate::{DecodeError, PlaybackFix, Result};

/// Size of one playback record in bytes.
pub const RECORD_LEN: usize = 9;

/// Decode a single 9-byte playback record.
pub fn decode_record(record: &[u8; RECORD_LEN], epoch: u64) -> Result<PlaybackFix> {
    let latitude = scale_coordinate(read_int16_le(&record[0..2])?);
    let longitude = scale_coordinate(read_int16_le(&record[2..4])?);
    let altitude = read_uint16_le(&record[4..6])?;
    let minutes_since_epoch = read_uint32_le(&[record[6], record[7], record[8], 0])?;
    let timestamp = (minutes_since_epoch as u64 * 60).checked_add(epoch).ok_or_else(|| {
        DecodeError::config(
            "playback_epoch",
            format!("epoch {epoch} overflows timestamp for minute {minutes_since_epoch}"),
        )
    })?;

    Ok(PlaybackFix { latitude, longitude, altitude, minutes_since_epoch, timestamp })
}

/// Decode every complete record in `tail`. Bytes that do not fill a whole
/// record are ignored.
pub fn decode_records(tail: &[u8], epoch: u64) -> Result<Vec<PlaybackFix>> {
    let chunks = tail.chunks_exact(RECORD_LEN);
    let remainder = chunks.remainder().len();
    if remainder != 0 {
        debug!(remainder, "Ignoring trailing bytes after playback records");
    }

    chunks
        .map(|chunk| {
            let mut record = [0u8; RECORD_LEN];
            record.copy_from_slice(chunk);
            decode_record(&record, epoch)
        })
        .collect()
}
