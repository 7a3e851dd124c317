//! Live `sts get-caller-identity` for the first two profiles

use serde::Deserialize;

use crate::config::Settings;
use crate::process::{run_with_timeout, ProcessError};
use crate::profiles;
use crate::tracker::CheckReporter;

use super::CheckError;

pub const NAME: &str = "Caller identity for profiles";

/// Profiles that must authenticate
const REQUIRED: usize = 2;

/// Fields of interest in `aws sts get-caller-identity` output
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CallerIdentity {
    #[serde(rename = "Account")]
    pub account: Option<String>,
    #[serde(rename = "Arn")]
    pub arn: Option<String>,
}

/// Result of looking up one profile
#[derive(Debug)]
pub enum Lookup {
    Authenticated(CallerIdentity),
    Rejected { stderr: String },
    TimedOut,
    InvalidJson(serde_json::Error),
    NotRun(ProcessError),
}

impl Lookup {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Lookup::Authenticated(_))
    }
}

pub fn lookup(settings: &Settings, profile: &str) -> Lookup {
    let args = ["sts", "get-caller-identity", "--profile", profile];
    match run_with_timeout(&settings.aws_cli, &args, settings.identity_timeout) {
        Ok(output) if output.success() => match serde_json::from_str(&output.stdout) {
            Ok(identity) => Lookup::Authenticated(identity),
            Err(err) => Lookup::InvalidJson(err),
        },
        Ok(output) => Lookup::Rejected {
            stderr: output.stderr,
        },
        Err(ProcessError::TimedOut { .. }) => Lookup::TimedOut,
        Err(err) => Lookup::NotRun(err),
    }
}

pub fn run(settings: &Settings, out: &mut dyn CheckReporter) -> Result<(), CheckError> {
    let config_path = &settings.aws_config;
    if !config_path.exists() {
        out.warn(&format!(
            "{} not found, skipping caller identity test",
            config_path.display()
        ));
        return Ok(());
    }

    let names = profiles::load_profile_names(config_path)?;
    let Some((first, second)) = profiles::first_two(&names) else {
        out.warn(&format!(
            "Only {} profile(s) found, expected at least 2",
            names.len()
        ));
        return Ok(());
    };

    let mut success_count = 0;
    for profile in [first, second] {
        out.note(&format!("Testing profile: {}", profile));
        let result = lookup(settings, profile);
        tracing::debug!(profile, authenticated = result.is_authenticated(), "caller identity");
        report(out, profile, &result);
        if result.is_authenticated() {
            success_count += 1;
        }
    }

    ensure_check!(
        success_count == REQUIRED,
        "Only {}/{} profiles authenticated successfully",
        success_count,
        REQUIRED
    );
    out.note(&format!(
        "All {} profiles authenticated successfully",
        success_count
    ));
    Ok(())
}

fn report(out: &mut dyn CheckReporter, profile: &str, result: &Lookup) {
    match result {
        Lookup::Authenticated(identity) => {
            out.note("  Successfully authenticated");
            out.note(&format!(
                "    Account: {}",
                identity.account.as_deref().unwrap_or("N/A")
            ));
            out.note(&format!(
                "    ARN: {}",
                identity.arn.as_deref().unwrap_or("N/A")
            ));
        }
        Lookup::Rejected { stderr } => {
            out.note("  Failed to get caller identity");
            out.note(&format!("    Error: {}", stderr.trim()));
        }
        Lookup::TimedOut => out.note(&format!("  Command timed out for profile {}", profile)),
        Lookup::InvalidJson(err) => out.note(&format!("  Invalid JSON response: {}", err)),
        Lookup::NotRun(err) => out.note(&format!("  Unexpected error: {}", err)),
    }
}
