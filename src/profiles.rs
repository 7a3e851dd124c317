//! Profile discovery in the AWS CLI config file
//!
//! This is a line-oriented scan for `[profile <name>]` headers, not an INI
//! parser. Names containing `]` and continuation lines are not supported.

use std::io;
use std::path::Path;

const PROFILE_HEADER_PREFIX: &str = "[profile ";

/// Extract profile names in order of appearance. Duplicates are kept.
pub fn parse_profile_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(PROFILE_HEADER_PREFIX))
        .map(|line| line.replace(PROFILE_HEADER_PREFIX, "").replace(']', ""))
        .collect()
}

/// Read `path` and extract its profile names.
pub fn load_profile_names(path: &Path) -> io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_profile_names(&content))
}

/// The two profiles the checks compare. Later profiles are ignored.
pub fn first_two(profiles: &[String]) -> Option<(&str, &str)> {
    match profiles {
        [first, second, ..] => Some((first.as_str(), second.as_str())),
        _ => None,
    }
}
