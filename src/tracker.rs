//! Result tracker
//!
//! Runs each check once, keeps pass/fail/warning counts and forwards every
//! event to a [`ReportSink`] for rendering.

use crate::checks::CheckError;

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    /// An expected condition was not met
    Failed(String),
    /// Anything else went wrong while checking
    Error(String),
}

impl CheckOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed)
    }

    pub fn status(&self) -> &'static str {
        match self {
            CheckOutcome::Passed => "pass",
            CheckOutcome::Failed(_) => "fail",
            CheckOutcome::Error(_) => "error",
        }
    }
}

impl From<Result<(), CheckError>> for CheckOutcome {
    fn from(result: Result<(), CheckError>) -> Self {
        match result {
            Ok(()) => CheckOutcome::Passed,
            Err(CheckError::Assertion(message)) => CheckOutcome::Failed(message),
            Err(other) => CheckOutcome::Error(other.to_string()),
        }
    }
}

/// Pass/fail/warning tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
}

impl Counts {
    /// Warnings never count against success.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn executed(&self) -> usize {
        self.passed + self.failed
    }
}

/// Destination for tracker events
pub trait ReportSink {
    fn check_started(&mut self, _name: &str) {}

    /// Progress line emitted by a running check
    fn note(&mut self, line: &str);

    fn warning(&mut self, message: &str);

    fn check_finished(&mut self, name: &str, outcome: &CheckOutcome);

    fn summary(&mut self, counts: &Counts);
}

/// What a running check may report besides its result
pub trait CheckReporter {
    fn note(&mut self, line: &str);

    /// Inconclusive evidence. Counted, but never fails the run.
    fn warn(&mut self, message: &str);
}

pub struct Tracker<S> {
    counts: Counts,
    sink: S,
}

impl<S: ReportSink> Tracker<S> {
    pub fn new(sink: S) -> Self {
        Self {
            counts: Counts::default(),
            sink,
        }
    }

    /// Run `check` once and record its outcome. Returns whether it passed.
    pub fn record<F>(&mut self, name: &str, check: F) -> bool
    where
        F: FnOnce(&mut Self) -> Result<(), CheckError>,
    {
        self.sink.check_started(name);
        let outcome = CheckOutcome::from(check(&mut *self));

        match &outcome {
            CheckOutcome::Passed => self.counts.passed += 1,
            CheckOutcome::Failed(message) => {
                self.counts.failed += 1;
                tracing::info!(check = name, %message, "check failed");
            }
            CheckOutcome::Error(message) => {
                self.counts.failed += 1;
                tracing::warn!(check = name, %message, "check errored");
            }
        }

        self.sink.check_finished(name, &outcome);
        outcome.is_passed()
    }

    pub fn warn(&mut self, message: &str) {
        self.counts.warnings += 1;
        self.sink.warning(message);
    }

    pub fn note(&mut self, line: &str) {
        self.sink.note(line);
    }

    /// Emit the totals; true iff nothing failed.
    pub fn summarize(&mut self) -> bool {
        self.sink.summary(&self.counts);
        self.counts.is_success()
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    #[cfg(test)]
    pub(crate) fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: ReportSink> CheckReporter for Tracker<S> {
    fn note(&mut self, line: &str) {
        Tracker::note(self, line);
    }

    fn warn(&mut self, message: &str) {
        Tracker::warn(self, message);
    }
}

#[cfg(test)]
pub(crate) use recording::{Event, RecordingSink};
