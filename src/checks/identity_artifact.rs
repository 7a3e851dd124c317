//! Identity artifact structure check

use crate::config::Settings;
use crate::identity::{DocumentError, IdentityDocument};
use crate::tracker::CheckReporter;

use super::CheckError;

pub const NAME: &str = "profiles_identity.json structure";

/// Nested records are not validated here; the distinctness check reads them.
pub fn run(settings: &Settings, out: &mut dyn CheckReporter) -> Result<(), CheckError> {
    let path = &settings.identity_artifact;
    let name = settings.identity_artifact_name();

    ensure_check!(path.exists(), "{} does not exist", path.display());
    out.note(&format!("{} exists", path.display()));

    let document = match IdentityDocument::read(path) {
        Ok(document) => document,
        Err(DocumentError::Parse(err)) => {
            return Err(CheckError::assertion(format!(
                "{} is not valid JSON: {}",
                name, err
            )))
        }
        Err(err) => return Err(anyhow::Error::new(err).into()),
    };
    out.note(&format!("{} is valid JSON", name));

    let Some(count) = document.entry_count() else {
        return Err(CheckError::assertion(format!(
            "{} should be a JSON object or array, found {}",
            name,
            document.type_name()
        )));
    };
    out.note(&format!("Found {} profile(s) in {}", count, name));
    Ok(())
}
