//! Error types for uplink decoding.
//!
//! Every failure is returned as a [`DecodeError`] value. The decoder never
//! panics on malformed input and never returns partial telemetry alongside an
//! error.
//!
//! ## Error Categories
//!
//! - **Port Errors**: the frame port has no payload schema
//! - **Length Errors**: the frame is shorter than its schema requires
//! - **Window Errors**: a primitive reader was handed the wrong number of bytes
//! - **Configuration Errors**: decoder options could not be loaded
//!
//! ## Wire Shape
//!
//! Network backends expect errors as an ordered list of messages:
//!
//! ```rust
//! use pico_uplink::DecodeError;
//!
//! let error = DecodeError::unrecognized_port(12);
//! assert_eq!(error.tag(), "UnrecognizedPort");
//! assert_eq!(error.messages(), vec!["Unknown FPort - see device manual!".to_string()]);
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for decoding operations.
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Main error type for decoding operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("Unknown FPort - see device manual!")]
    UnrecognizedPort { port: u32 },

    #[error("Frame too short for port {port}: need {required} bytes, got {actual}")]
    FrameTooShort { port: u32, required: usize, actual: usize },

    #[error("{reader} expects a {expected}-byte window, got {actual}")]
    WindowSize { reader: &'static str, expected: usize, actual: usize },

    #[error("Configuration error in {context}: {details}")]
    Config { context: String, details: String },

    #[error("Configuration file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DecodeError {
    /// Stable name of the error variant.
    pub fn tag(&self) -> &'static str {
        match self {
            DecodeError::UnrecognizedPort { .. } => "UnrecognizedPort",
            DecodeError::FrameTooShort { .. } => "FrameTooShort",
            DecodeError::WindowSize { .. } => "WindowSize",
            DecodeError::Config { .. } => "Config",
            DecodeError::File { .. } => "File",
        }
    }

    /// Human-readable messages in the order a backend should report them.
    pub fn messages(&self) -> Vec<String> {
        vec![self.to_string()]
    }

    /// Whether the error was caused by the frame itself rather than the caller's setup.
    pub fn is_frame_error(&self) -> bool {
        matches!(
            self,
            DecodeError::UnrecognizedPort { .. }
                | DecodeError::FrameTooShort { .. }
                | DecodeError::WindowSize { .. }
        )
    }

    /// Helper constructor for frames on a port without a schema.
    pub fn unrecognized_port(port: u32) -> Self {
        DecodeError::UnrecognizedPort { port }
    }

    /// Helper constructor for frames shorter than their schema.
    pub fn frame_too_short(port: u32, required: usize, actual: usize) -> Self {
        DecodeError::FrameTooShort { port, required, actual }
    }

    /// Helper constructor for primitive reader bounds errors.
    pub fn window_size(reader: &'static str, expected: usize, actual: usize) -> Self {
        DecodeError::WindowSize { reader, expected, actual }
    }

    /// Helper constructor for configuration errors.
    pub fn config(context: impl Into<String>, details: impl Into<String>) -> Self {
        DecodeError::Config { context: context.into(), details: details.into() }
    }

    /// Helper constructor for configuration file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        DecodeError::File { path, source }
    }
}

impl From<serde_yaml_ng::Error> for DecodeError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        DecodeError::Config { context: "YAML parsing".to_string(), details: err.to_string() }
    }
}
