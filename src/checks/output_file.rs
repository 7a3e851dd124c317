//! Marker text file check

use crate::config::Settings;
use crate::tracker::CheckReporter;

use super::CheckError;

pub const NAME: &str = "hello.txt content verification";

/// First existing candidate wins; later ones are never consulted.
pub fn run(settings: &Settings, out: &mut dyn CheckReporter) -> Result<(), CheckError> {
    let Some(path) = settings.output_candidates.iter().find(|p| p.exists()) else {
        let tried: Vec<String> = settings
            .output_candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        return Err(CheckError::assertion(format!(
            "hello.txt not found in any of: {:?}",
            tried
        )));
    };

    let content = std::fs::read_to_string(path)?;
    out.note(&format!("Found file at {}", path.display()));
    out.note(&format!("  Content: {}", content.trim()));
    Ok(())
}
