//! Decoder configuration
//!
//! Options are plain serde data, so a backend can embed them in its own
//! configuration or load them from a standalone YAML file:
//!
//! ```yaml
//! decode_playback: true
//! playback_epoch: 1577840461
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::{DecodeError, Result};

/// Unix time of the tracker's minute counter origin (2020-01-01 01:01:01 UTC).
pub const DEFAULT_PLAYBACK_EPOCH: u64 = 1_577_840_461;

/// Largest epoch for which every 24-bit minute counter yields a valid timestamp.
pub const MAX_PLAYBACK_EPOCH: u64 = u64::MAX - 0xFF_FFFF * 60;

/// Options controlling how frames are decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
#[serde(default)]
pub struct DecoderConfig {
    /// Decode the historical fixes that follow the telemetry header
    pub decode_playback: bool,
    /// Unix time that playback minute counters are relative to
    pub playback_epoch: u64,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { decode_playback: true, playback_epoch: DEFAULT_PLAYBACK_EPOCH }
    }
}

impl DecoderConfig {
    /// Check option ranges.
    pub fn validate(&self) -> Result<()> {
        if self.playback_epoch > MAX_PLAYBACK_EPOCH {
            return Err(DecodeError::config(
                "playback_epoch",
                format!("{} exceeds maximum {}", self.playback_epoch, MAX_PLAYBACK_EPOCH),
            ));
        }
        Ok(())
    }

    /// Parse a configuration from YAML. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        debug!(
            decode_playback = config.decode_playback,
            playback_epoch = config.playback_epoch,
            "Loaded decoder configuration"
        );
        Ok(config)
    }

    /// Read and parse a YAML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| DecodeError::file_error(path.to_path_buf(), e))?;
        Self::from_yaml_str(&yaml)
    }

    /// Serialize this configuration to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Disable playback decoding; frames yield only the header measurements.
    pub fn without_playback(mut self) -> Self {
        self.decode_playback = false;
        self
    }
}
