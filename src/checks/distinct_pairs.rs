//! Distinct account-role pairs for the first two profiles

use crate::config::Settings;
use crate::identity::IdentityDocument;
use crate::profiles;
use crate::tracker::CheckReporter;

use super::CheckError;

pub const NAME: &str = "Distinct account-role pairs";

pub fn run(settings: &Settings, out: &mut dyn CheckReporter) -> Result<(), CheckError> {
    let config_path = &settings.aws_config;
    ensure_check!(config_path.exists(), "{} not found", config_path.display());

    let names = profiles::load_profile_names(config_path)?;
    let Some((first, second)) = profiles::first_two(&names) else {
        return Err(CheckError::assertion(format!(
            "Expected at least 2 profiles, found {}",
            names.len()
        )));
    };
    out.note(&format!(
        "Found {} profile(s): {}, {}",
        names.len(),
        first,
        second
    ));

    let artifact = &settings.identity_artifact;
    if !artifact.exists() {
        out.warn(&format!(
            "{} not found, cannot verify distinct account-role pairs",
            settings.identity_artifact_name()
        ));
        return Ok(());
    }

    let document = IdentityDocument::read(artifact).map_err(anyhow::Error::new)?;
    let first_ids = document.account_role(first);
    let second_ids = document.account_role(second);

    let (Some(first_pair), Some(second_pair)) = (first_ids.pair(), second_ids.pair()) else {
        out.warn(&format!(
            "Could not extract account-role information from {}. Found: {}={}, {}={}",
            settings.identity_artifact_name(),
            first,
            first_ids,
            second,
            second_ids
        ));
        return Ok(());
    };

    ensure_check!(
        first_pair != second_pair,
        "Profiles have the same account-role pair: {}",
        first_pair
    );
    out.note("Profiles have distinct account-role pairs:");
    out.note(&format!("  {}: {}", first, first_pair));
    out.note(&format!("  {}: {}", second, second_pair));
    Ok(())
}
