//! `aws-sso-util` installation check

use crate::config::Settings;
use crate::process::{run_with_timeout, ProcessError};
use crate::tracker::CheckReporter;

use super::CheckError;

pub const NAME: &str = "aws-sso-util is installed";

pub fn run(settings: &Settings, out: &mut dyn CheckReporter) -> Result<(), CheckError> {
    let tool = settings.sso_util.as_str();

    let output = match run_with_timeout(tool, &["--version"], settings.version_timeout) {
        Ok(output) => output,
        Err(ProcessError::NotFound { .. }) => {
            return Err(CheckError::assertion(format!(
                "{} is not installed or not in PATH",
                tool
            )))
        }
        Err(ProcessError::TimedOut { .. }) => {
            return Err(CheckError::assertion(format!("{} command timed out", tool)))
        }
        Err(err) => return Err(anyhow::Error::new(err).into()),
    };

    ensure_check!(output.success(), "{} command failed", tool);
    out.note(&format!("{} is installed: {}", tool, output.stdout.trim()));
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::checks::testing::{script, serial, settings_in};
    use crate::tracker::RecordingSink;
    use std::time::Duration;

    #[test]
    fn passes_and_reports_version() {
        let _guard = serial();
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings_in(dir.path());
        settings.sso_util = script(&dir.path().join("bin/sso-util"), "echo 4.30.0");

        let mut sink = RecordingSink::default();
        run(&settings, &mut sink).unwrap();
        assert!(sink.notes()[0].ends_with("is installed: 4.30.0"));
    }

    #[test]
    fn missing_tool_is_assertion_failure() {
        let _guard = serial();
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings_in(dir.path());
        settings.sso_util = dir.path().join("absent").display().to_string();

        let err = run(&settings, &mut RecordingSink::default()).unwrap_err();
        assert!(err.is_assertion());
        assert!(err.to_string().contains("is not installed or not in PATH"));
    }

    #[test]
    fn non_zero_exit_fails() {
        let _guard = serial();
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings_in(dir.path());
        settings.sso_util = script(&dir.path().join("bin/sso-util"), "exit 2");

        let err = run(&settings, &mut RecordingSink::default()).unwrap_err();
        assert!(err.to_string().ends_with("command failed"));
    }

    #[test]
    fn hanging_tool_times_out() {
        let _guard = serial();
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings_in(dir.path());
        settings.sso_util = script(&dir.path().join("bin/sso-util"), "exec sleep 5");
        settings.version_timeout = Duration::from_millis(200);

        let err = run(&settings, &mut RecordingSink::default()).unwrap_err();
        assert!(err.to_string().ends_with("command timed out"));
    }
}
