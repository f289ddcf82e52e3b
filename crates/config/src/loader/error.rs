//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Does NOT handle:
//! - Lookup failures after construction (getters are infallible by
//!   design and fall back to zero values, see `facade`).
//!
//! Invariants:
//! - All variants name the offending file path or key for diagnosis.
//! - Errors surface once, immediately, from `ConfigLoader::load`; there
//!   is no retry policy.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The required default configuration file does not exist.
    #[error("config file not found at {path}")]
    FileNotFound { path: PathBuf },

    /// A configuration file exists but could not be read or parsed.
    ///
    /// Raised for the default file and for an overlay file that is
    /// present but invalid. A missing overlay file is not an error.
    #[error("failed to load config file at {path}")]
    FileLoad {
        path: PathBuf,
        #[source]
        source: figment::Error,
    },

    /// An explicit environment binding was rejected.
    #[error("failed to bind environment variable for key '{key}': {reason}")]
    EnvBind { key: String, reason: String },
}
