//! NDJSON event types emitted in `--json` mode.
//!
//! Every event carries an `event` tag; check-scoped events also name the
//! check they belong to.

use serde::Serialize;
use sso_verify::{CheckOutcome, Counts};

/// First event of a run
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'static str,
    pub version: &'static str,
    pub checks: Vec<&'a str>,
}

impl<'a> StartEvent<'a> {
    pub fn new(checks: Vec<&'a str>) -> Self {
        Self {
            event: "start",
            command: "sso-verify",
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckStartEvent<'a> {
    pub event: &'static str,
    pub check: &'a str,
}

impl<'a> CheckStartEvent<'a> {
    pub fn new(check: &'a str) -> Self {
        Self {
            event: "check_start",
            check,
        }
    }
}

/// A progress line or a warning
#[derive(Debug, Clone, Serialize)]
pub struct MessageEvent<'a> {
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<&'a str>,
    pub message: &'a str,
}

impl<'a> MessageEvent<'a> {
    pub fn note(check: Option<&'a str>, message: &'a str) -> Self {
        Self {
            event: "note",
            check,
            message,
        }
    }

    pub fn warning(check: Option<&'a str>, message: &'a str) -> Self {
        Self {
            event: "warning",
            check,
            message,
        }
    }
}

/// Outcome of one check
#[derive(Debug, Clone, Serialize)]
pub struct CheckEvent<'a> {
    pub event: &'static str,
    pub check: &'a str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
}

impl<'a> CheckEvent<'a> {
    pub fn new(check: &'a str, outcome: &'a CheckOutcome) -> Self {
        let message = match outcome {
            CheckOutcome::Passed => None,
            CheckOutcome::Failed(m) | CheckOutcome::Error(m) => Some(m.as_str()),
        };
        Self {
            event: "check",
            check,
            status: outcome.status(),
            message,
        }
    }
}

/// Last event of a run
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent {
    pub event: &'static str,
    pub success: bool,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
}

impl CompleteEvent {
    pub fn new(counts: &Counts) -> Self {
        Self {
            event: "complete",
            success: counts.is_success(),
            passed: counts.passed,
            failed: counts.failed,
            warnings: counts.warnings,
        }
    }
}
