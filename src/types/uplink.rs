//! Request/response shapes used by network backends

use serde::{Deserialize, Serialize};

use super::DecodedTelemetry;
use crate::DecodeError;

/// An uplink as delivered by a network server: payload bytes plus the frame port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
pub struct UplinkRequest {
    pub bytes: Vec<u8>,
    #[serde(rename = "fPort")]
    pub f_port: u32,
}

impl UplinkRequest {
    pub fn new(bytes: impl Into<Vec<u8>>, f_port: u32) -> Self {
        Self { bytes: bytes.into(), f_port }
    }
}

/// Result of decoding an [`UplinkRequest`].
///
/// Serializes as `{"data": {...}}` on success and `{"errors": ["..."]}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
#[serde(untagged)]
pub enum UplinkResponse {
    Data { data: DecodedTelemetry },
    Errors { errors: Vec<String> },
}

impl UplinkResponse {
    pub fn is_ok(&self) -> bool {
        matches!(self, UplinkResponse::Data { .. })
    }

    /// Decoded telemetry, if decoding succeeded.
    pub fn data(&self) -> Option<&DecodedTelemetry> {
        match self {
            UplinkResponse::Data { data } => Some(data),
            UplinkResponse::Errors { .. } => None,
        }
    }

    /// Error messages, empty on success.
    pub fn errors(&self) -> &[String] {
        match self {
            UplinkResponse::Data { .. } => &[],
            UplinkResponse::Errors { errors } => errors,
        }
    }
}

impl From<crate::Result<DecodedTelemetry>> for UplinkResponse {
    fn from(result: crate::Result<DecodedTelemetry>) -> Self {
        match result {
            Ok(data) => UplinkResponse::Data { data },
            Err(err) => err.into(),
        }
    }
}

impl From<DecodeError> for UplinkResponse {
    fn from(err: DecodeError) -> Self {
        UplinkResponse::Errors { errors: err.messages() }
    }
}
