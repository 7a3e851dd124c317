//! Verification driver
//!
//! Runs the checks in a fixed order through a [`Tracker`] and reports the
//! totals. A failed check never stops the checks after it.

use crate::checks::{
    auth_evidence, caller_identity, distinct_pairs, identity_artifact, installation, output_file,
    CheckError,
};
use crate::config::Settings;
use crate::tracker::{CheckReporter, Counts, ReportSink, Tracker};

/// Identifier of a check, as accepted by `--skip`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum CheckId {
    Installed,
    AuthMethod,
    OutputFile,
    IdentityArtifact,
    DistinctPairs,
    CallerIdentity,
}

type CheckFn = fn(&Settings, &mut dyn CheckReporter) -> Result<(), CheckError>;

impl CheckId {
    /// Every check, in run order
    pub const ALL: [CheckId; 6] = [
        CheckId::Installed,
        CheckId::AuthMethod,
        CheckId::OutputFile,
        CheckId::IdentityArtifact,
        CheckId::DistinctPairs,
        CheckId::CallerIdentity,
    ];

    /// Human-readable check name
    pub fn title(self) -> &'static str {
        match self {
            CheckId::Installed => installation::NAME,
            CheckId::AuthMethod => auth_evidence::NAME,
            CheckId::OutputFile => output_file::NAME,
            CheckId::IdentityArtifact => identity_artifact::NAME,
            CheckId::DistinctPairs => distinct_pairs::NAME,
            CheckId::CallerIdentity => caller_identity::NAME,
        }
    }

    /// Kebab-case id used on the command line
    pub fn slug(self) -> &'static str {
        match self {
            CheckId::Installed => "installed",
            CheckId::AuthMethod => "auth-method",
            CheckId::OutputFile => "output-file",
            CheckId::IdentityArtifact => "identity-artifact",
            CheckId::DistinctPairs => "distinct-pairs",
            CheckId::CallerIdentity => "caller-identity",
        }
    }

    fn check_fn(self) -> CheckFn {
        match self {
            CheckId::Installed => installation::run,
            CheckId::AuthMethod => auth_evidence::run,
            CheckId::OutputFile => output_file::run,
            CheckId::IdentityArtifact => identity_artifact::run,
            CheckId::DistinctPairs => distinct_pairs::run,
            CheckId::CallerIdentity => caller_identity::run,
        }
    }
}

/// Checks to run, in order, minus `skip`
pub fn selected_checks(skip: &[CheckId]) -> Vec<CheckId> {
    CheckId::ALL
        .into_iter()
        .filter(|id| !skip.contains(id))
        .collect()
}

/// Outcome of a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub counts: Counts,
    pub success: bool,
}

impl RunSummary {
    /// Process exit code: 0 iff nothing failed.
    pub fn exit_code(&self) -> u8 {
        if self.success {
            0
        } else {
            1
        }
    }
}

/// Run `checks` in order and summarize.
pub fn run_checks<S: ReportSink>(
    settings: &Settings,
    checks: &[CheckId],
    tracker: &mut Tracker<S>,
) -> RunSummary {
    for id in checks {
        let check = id.check_fn();
        tracing::debug!(check = id.slug(), "running");
        tracker.record(id.title(), |t| check(settings, t));
    }

    let success = tracker.summarize();
    RunSummary {
        counts: tracker.counts(),
        success,
    }
}
