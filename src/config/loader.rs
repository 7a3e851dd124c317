//! Configuration loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{VerifyError, VerifyResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config, MAX_TIMEOUT_SECS};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key `{}` in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean `{}`?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
fn load_with_warnings(path: &Path) -> VerifyResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(content: &str, path: &Path) -> VerifyResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| VerifyError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config
        .timeouts
        .validate()
        .map_err(|message| VerifyError::InvalidConfig {
            file: path.to_path_buf(),
            message,
        })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit config file, the user config, or defaults.
///
/// An explicit path must exist. The user config
/// (`<config_dir>/sso-verify/config.toml`) is optional.
pub fn load_or_default(explicit: Option<&Path>) -> VerifyResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(VerifyError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            tracing::debug!(path = %user_config.display(), "loading user config");
            let (config, warnings) = load_with_warnings(&user_config)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (SSO_VERIFY_* prefix)
fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

pub(crate) fn with_env_overrides_from<W: std::io::Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> Config {
    if let Some(home) = non_empty(get_env("SSO_VERIFY_HOME")) {
        config.paths.home = Some(PathBuf::from(home));
    }

    if let Some(path) = non_empty(get_env("SSO_VERIFY_AWS_CONFIG")) {
        config.paths.aws_config = Some(PathBuf::from(path));
    }

    if let Some(path) = non_empty(get_env("SSO_VERIFY_IDENTITY_ARTIFACT")) {
        config.paths.identity_artifact = PathBuf::from(path);
    }

    // Platform path-list separator (':' on Unix, ';' on Windows)
    if let Some(list) = non_empty(get_env("SSO_VERIFY_OUTPUT_CANDIDATES")) {
        let candidates: Vec<PathBuf> = std::env::split_paths(&list)
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        if !candidates.is_empty() {
            config.paths.output_candidates = candidates;
        }
    }

    if let Some(program) = non_empty(get_env("SSO_VERIFY_SSO_UTIL")) {
        config.tools.sso_util = program;
    }

    if let Some(program) = non_empty(get_env("SSO_VERIFY_AWS_CLI")) {
        config.tools.aws_cli = program;
    }

    if let Some(secs) = get_env("SSO_VERIFY_VERSION_TIMEOUT") {
        config.timeouts.version_secs = parse_secs(
            "SSO_VERIFY_VERSION_TIMEOUT",
            &secs,
            config.timeouts.version_secs,
            warnings,
        );
    }

    if let Some(secs) = get_env("SSO_VERIFY_IDENTITY_TIMEOUT") {
        config.timeouts.identity_secs = parse_secs(
            "SSO_VERIFY_IDENTITY_TIMEOUT",
            &secs,
            config.timeouts.identity_secs,
            warnings,
        );
    }

    if let Some(color) = get_env("SSO_VERIFY_COLOR") {
        let validator = EnvVarValidator::new("SSO_VERIFY_COLOR", ColorMode::VALUES);
        config.output.color =
            validator.parse_with_writer(&color, ColorMode::parse, config.output.color, warnings);
    }

    config
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_secs<W: std::io::Write>(var: &str, value: &str, default: u64, writer: &mut W) -> u64 {
    match value.trim().parse::<u64>() {
        Ok(secs) if (1..=MAX_TIMEOUT_SECS).contains(&secs) => secs,
        _ => {
            let _ = writeln!(
                writer,
                "Warning: Invalid {} value '{}' (expected 1 to {} seconds)",
                var, value, MAX_TIMEOUT_SECS
            );
            default
        }
    }
}

/// `<config_dir>/sso-verify/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sso-verify").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "tools",
        "sso_util",
        "aws_cli",
        "timeouts",
        "version_secs",
        "identity_secs",
        "paths",
        "home",
        "aws_config",
        "identity_artifact",
        "output_candidates",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) fn parse_str(content: &str) -> VerifyResult<(Config, Vec<ConfigWarning>)> {
    parse_with_warnings(content, Path::new("config.toml"))
}
