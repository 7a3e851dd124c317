//! Error types for sso-verify
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sso-verify operations
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Errors raised outside of individual checks (configuration, setup)
#[derive(Error, Debug)]
pub enum VerifyError {
    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Resolved settings are out of range
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Explicitly requested configuration file does not exist
    #[error("configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Home directory could not be determined and was not configured
    #[error("cannot determine home directory; set SSO_VERIFY_HOME or paths.home")]
    NoHomeDir,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
