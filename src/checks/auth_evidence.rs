//! Evidence that the login went through `aws-sso-util`
//!
//! Cache contents are a heuristic, so a cache without the expected markers is
//! only a warning.

use std::path::Path;

use crate::config::Settings;
use crate::tracker::CheckReporter;

use super::CheckError;

pub const NAME: &str = "Authentication method verification";

/// Marker written by `aws-sso-util` into the CLI cache
pub const SSO_UTIL_MARKER: &str = "aws-sso-util.json";

pub fn run(settings: &Settings, out: &mut dyn CheckReporter) -> Result<(), CheckError> {
    let sso_cache = settings.sso_cache_dir();
    let cli_cache = settings.cli_cache_dir();

    ensure_check!(
        sso_cache.exists() || cli_cache.exists(),
        "No AWS SSO cache directory found (looked for {} and {})",
        sso_cache.display(),
        cli_cache.display()
    );
    out.note("AWS SSO cache directory exists");

    let marker = cli_cache.join(SSO_UTIL_MARKER);
    let token_count = json_entries(&sso_cache);
    tracing::debug!(marker = %marker.display(), token_count, "inspected SSO caches");

    if marker.exists() || token_count > 0 {
        out.note("Authentication appears to use aws-sso-util");
    } else {
        out.warn("Could not definitively verify aws-sso-util login method");
    }
    Ok(())
}

/// Number of `*.json` entries directly under `dir`; unreadable counts as none.
fn json_entries(dir: &Path) -> usize {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return 0;
    };
    entries
        .flatten()
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::{settings_in, write};
    use crate::tracker::RecordingSink;

    #[test]
    fn fails_without_any_cache_dir() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());

        let err = run(&settings, &mut RecordingSink::default()).unwrap_err();
        assert!(err.is_assertion());
        assert!(err.to_string().starts_with("No AWS SSO cache directory found"));
    }

    #[test]
    fn sso_token_file_counts_as_evidence() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        write(&settings.sso_cache_dir().join("abc123.json"), "{}");

        let mut sink = RecordingSink::default();
        run(&settings, &mut sink).unwrap();
        assert!(sink.warnings().is_empty());
        assert!(sink.notes().contains(&"Authentication appears to use aws-sso-util"));
    }

    #[test]
    fn cli_cache_marker_counts_as_evidence() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        write(&settings.cli_cache_dir().join(SSO_UTIL_MARKER), "{}");

        let mut sink = RecordingSink::default();
        run(&settings, &mut sink).unwrap();
        assert!(sink.warnings().is_empty());
    }

    #[test]
    fn empty_cache_only_warns() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        std::fs::create_dir_all(settings.cli_cache_dir()).unwrap();
        write(&settings.cli_cache_dir().join("other.json"), "{}");

        let mut sink = RecordingSink::default();
        run(&settings, &mut sink).unwrap();
        assert_eq!(
            sink.warnings(),
            vec!["Could not definitively verify aws-sso-util login method"]
        );
    }
}
