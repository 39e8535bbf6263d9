//! Frame decoder and the two backend call shapes
//!
//! [`Decoder::decode`] is the single decoding path. [`Decoder::decode_request`]
//! only reshapes its arguments and result for backends that hand over one
//! request object.

use tracing::{debug, trace};

use crate::schema::PayloadSchema;
use crate::{DecodeError, DecodedTelemetry, DecoderConfig, Result, UplinkRequest, UplinkResponse};

/// Stateless uplink decoder.
///
/// Holds only its configuration, so one instance can be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode raw frame bytes received on `port`.
    pub fn decode(&self, bytes: &[u8], port: u32) -> Result<DecodedTelemetry> {
        trace!(port, len = bytes.len(), "Decoding uplink");

        let Some(schema) = PayloadSchema::for_port(port) else {
            debug!(port, "No payload schema for port");
            return Err(DecodeError::unrecognized_port(port));
        };

        schema.decode(bytes, &self.config).inspect_err(|err| {
            debug!(port, len = bytes.len(), error = %err, "Frame rejected");
        })
    }

    /// Decode a request object, reporting failures as a message list.
    pub fn decode_request(&self, request: &UplinkRequest) -> UplinkResponse {
        self.decode(&request.bytes, request.f_port).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{TELEMETRY_SAMPLE, frame_with_playback, init_test_tracing};

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
          #[test]
          fn decoding_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 11..128)) {
            let decoder = Decoder::default();
            let first = decoder.decode(&bytes, 99).unwrap();
            let second = decoder.decode(&bytes, 99).unwrap();
            prop_assert_eq!(first, second);
          }

          #[test]
          fn unknown_ports_always_fail(
            port in any::<u32>().prop_filter("telemetry port", |p| *p != 99),
            bytes in prop::collection::vec(any::<u8>(), 0..64)
          ) {
            let err = Decoder::default().decode(&bytes, port).unwrap_err();
            prop_assert_eq!(err.tag(), "UnrecognizedPort");
            prop_assert_eq!(err.to_string(), "Unknown FPort - see device manual!");
          }

          #[test]
          fn short_frames_fail_explicitly(bytes in prop::collection::vec(any::<u8>(), 0..11)) {
            let err = Decoder::default().decode(&bytes, 99).unwrap_err();
            let is_too_short = matches!(
                err,
                DecodeError::FrameTooShort { port: 99, required: 11, actual } if actual == bytes.len()
            );
            prop_assert!(is_too_short);
          }

          #[test]
          fn packed_fields_stay_in_range(bytes in prop::collection::vec(any::<u8>(), 11..40)) {
            let t = Decoder::default().decode(&bytes, 99).unwrap();
            prop_assert!(t.sats <= 31);
            prop_assert!(t.reset_cnt <= 7);
            prop_assert!(t.days_of_playback <= 63);
            prop_assert!((18..=49).contains(&t.noload_voltage));
            prop_assert!((18..=49).contains(&t.load_voltage));
            prop_assert!(t.pressure <= 1270 && t.pressure % 10 == 0);
            prop_assert!((0..=255).contains(&t.board_temp));
            prop_assert_eq!(t.past_positions.len(), (bytes.len() - 11) / 9);
          }
        }
    }

    #[test]
    fn decode_request_wraps_data() {
        init_test_tracing();

        let response = Decoder::default().decode_request(&UplinkRequest::new(TELEMETRY_SAMPLE, 99));
        let data = response.data().expect("decoded telemetry");
        assert_eq!(data.sats, 1);
        assert!(data.app_ack);
        assert!(response.errors().is_empty());
    }

    #[test]
    fn decode_request_wraps_errors() {
        let response = Decoder::default().decode_request(&UplinkRequest::new(TELEMETRY_SAMPLE, 1));
        assert!(!response.is_ok());
        assert_eq!(response.errors(), ["Unknown FPort - see device manual!".to_string()]);
    }

    #[test]
    fn configuration_is_applied() {
        let frame = frame_with_playback(2);

        let full = Decoder::default().decode(&frame, 99).unwrap();
        assert_eq!(full.past_positions.len(), 2);

        let header_only = Decoder::new(DecoderConfig::default().without_playback());
        assert!(!header_only.config().decode_playback);
        assert!(header_only.decode(&frame, 99).unwrap().past_positions.is_empty());
    }

    #[test]
    fn overflowing_epoch_fails_without_panicking() {
        let config = DecoderConfig { playback_epoch: u64::MAX, ..DecoderConfig::default() };
        let mut frame = TELEMETRY_SAMPLE.to_vec();
        frame.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0x01, 0x00, 0x00]);

        let err = Decoder::new(config.clone()).decode(&frame, 99).unwrap_err();
        assert_eq!(err.tag(), "Config");

        let config = DecoderConfig { playback_epoch: crate::config::MAX_PLAYBACK_EPOCH, ..config };
        let response = Decoder::new(config).decode_request(&UplinkRequest::new(frame, 99));
        assert!(response.is_ok());
    }

    #[test]
    fn decoder_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Decoder>();

        let decoder = std::sync::Arc::new(Decoder::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let decoder = decoder.clone();
                std::thread::spawn(move || decoder.decode(&TELEMETRY_SAMPLE, 99).unwrap())
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }
}
