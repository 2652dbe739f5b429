//! Unified error handling for hostprint
//!
//! This crate provides the single error type used by the fingerprint engine,
//! the hardware backends and the command line front end.
//! It uses thiserror for ergonomic error definitions with proper Display and Error trait impls.

use std::io;
use std::path::PathBuf;

/// Result type alias using FingerprintError
pub type Result<T> = std::result::Result<T, FingerprintError>;

/// Unified error type for all hostprint operations
#[derive(thiserror::Error, Debug)]
pub enum FingerprintError {
    // ============================================================================
    // Fingerprint Provider Errors
    // ============================================================================
    #[error("No fingerprint provider was selected or no provider returned data from the host")]
    NoProviderData,

    #[error("The disk backing the OS root {root} was not found")]
    DiskNotFound {
        root: PathBuf,
    },

    #[error("Could not retrieve the serial number of the OS disk backing {root}")]
    DiskSerialEmpty {
        root: PathBuf,
    },

    #[error("No active (IP-enabled) network adapter detected")]
    NoActiveAdapter,

    // ============================================================================
    // Hardware Backend Errors
    // ============================================================================
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Hardware query on {class} failed: {reason}")]
    HardwareQuery {
        class: String,
        reason: String,
    },

    #[error("Operation not supported: {0}")]
    NotSupported(String),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Unknown fingerprint provider: {0}")]
    UnknownProvider(String),

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfig {
        field: String,
        reason: String,
    },

    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl FingerprintError {
    /// Create a hardware query error for a device class
    pub fn hardware_query(class: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::HardwareQuery {
            class: class.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a file read error carrying the offending path
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// True for the errors raised by the fingerprint providers themselves,
    /// as opposed to I/O or configuration failures around them.
    pub fn is_fatal_provider_error(&self) -> bool {
        matches!(
            self,
            Self::NoProviderData
                | Self::DiskNotFound { .. }
                | Self::DiskSerialEmpty { .. }
                | Self::NoActiveAdapter
        )
    }
}
