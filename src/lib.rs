//! sso-verify - verifier for an AWS SSO login workflow
//!
//! Runs a fixed sequence of checks against a machine that was set up to
//! authenticate through `aws-sso-util`: the helper is installed, SSO login
//! evidence exists on disk, the expected artifacts were produced, and two
//! configured profiles resolve to distinct, live identities.

pub mod checks;
pub mod config;
pub mod error;
pub mod identity;
pub mod presentation;
pub mod process;
pub mod profiles;
pub mod tracker;
pub mod verify;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, Settings};
pub use error::{VerifyError, VerifyResult};
pub use tracker::{CheckOutcome, CheckReporter, Counts, ReportSink, Tracker};
pub use verify::{run_checks, selected_checks, CheckId, RunSummary};
