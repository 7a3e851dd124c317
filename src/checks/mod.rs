//! The individual verification checks
//!
//! Each check is a plain function over resolved [`Settings`] that reports
//! progress through a [`CheckReporter`] and returns `Err` to fail.
//!
//! [`Settings`]: crate::config::Settings
//! [`CheckReporter`]: crate::tracker::CheckReporter

use thiserror::Error;

/// Fail the current check with an assertion message unless `cond` holds.
macro_rules! ensure_check {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::checks::CheckError::Assertion(format!($($arg)+)));
        }
    };
}

pub mod auth_evidence;
pub mod caller_identity;
pub mod distinct_pairs;
pub mod identity_artifact;
pub mod installation;
pub mod output_file;

/// Why a check did not pass
#[derive(Debug, Error)]
pub enum CheckError {
    /// Expected condition not met
    #[error("{0}")]
    Assertion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl CheckError {
    pub fn assertion(message: impl Into<String>) -> Self {
        CheckError::Assertion(message.into())
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, CheckError::Assertion(_))
    }
}
