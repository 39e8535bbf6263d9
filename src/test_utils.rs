//! Test utilities: sample frames and tracing setup shared by unit tests,
//! integration tests and benches.

#![cfg(any(test, feature = "benchmark"))]

use crate::schema::playback::RECORD_LEN;
use crate::schema::telemetry::HEADER_LEN;

/// Port 99 header with the ack bit and one satellite set, everything else zero.
pub const TELEMETRY_SAMPLE: [u8; HEADER_LEN] =
    [0x00, 0x00, 0x01, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

/// Header with every packed field populated and a position in the northern
/// hemisphere, west of Greenwich.
pub const POPULATED_HEADER: [u8; HEADER_LEN] =
    [0xA5, 0x5A, 0x65, 0x4B, 0x1C, 0xCA, 0x17, 0x12, 0xD3, 0xF2, 0x00];

/// A playback record 472110 minutes after the epoch.
pub const PLAYBACK_RECORD: [u8; RECORD_LEN] =
    [0xCA, 0x17, 0x12, 0xD3, 0xF2, 0x00, 0x2E, 0x34, 0x07];

/// Build a full frame: [`POPULATED_HEADER`] followed by `records` copies of
/// [`PLAYBACK_RECORD`] whose minute counters step back one hour each.
pub fn frame_with_playback(records: usize) -> Vec<u8> {
    let mut frame = Vec::with_capacity(HEADER_LEN + records * RECORD_LEN);
    frame.extend_from_slice(&POPULATED_HEADER);

    for i in 0..records {
        let mut record = PLAYBACK_RECORD;
        let minutes = 0x07342Eu32.saturating_sub(i as u32 * 60);
        record[6..9].copy_from_slice(&minutes.to_le_bytes()[..3]);
        frame.extend_from_slice(&record);
    }

    frame
}

/// Install a fmt subscriber honouring `RUST_LOG`. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
