//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{VerifyError, VerifyResult};

use super::loader::{self, ConfigWarning};

/// Default location of the identity artifact written by the login workflow.
pub const DEFAULT_IDENTITY_ARTIFACT: &str = "/app/output/profiles_identity.json";

/// Marker text file candidates, in priority order.
pub const DEFAULT_OUTPUT_CANDIDATES: &[&str] = &[
    "/app/hello world",
    "/app/hello.txt",
    "/app/git_task/hello world",
];

/// Upper bound for any subprocess wait ceiling (one hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// External programs invoked by the checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_sso_util")]
    pub sso_util: String,

    #[serde(default = "default_aws_cli")]
    pub aws_cli: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            sso_util: default_sso_util(),
            aws_cli: default_aws_cli(),
        }
    }
}

fn default_sso_util() -> String {
    "aws-sso-util".to_string()
}

fn default_aws_cli() -> String {
    "aws".to_string()
}

/// Wait ceilings for subprocess calls, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutsConfig {
    #[serde(default = "default_version_secs")]
    pub version_secs: u64,

    #[serde(default = "default_identity_secs")]
    pub identity_secs: u64,
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self {
            version_secs: default_version_secs(),
            identity_secs: default_identity_secs(),
        }
    }
}

impl TimeoutsConfig {
    /// Every ceiling must be in `1..=MAX_TIMEOUT_SECS`.
    pub fn validate(&self) -> Result<(), String> {
        let ceilings = [
            ("version_secs", self.version_secs),
            ("identity_secs", self.identity_secs),
        ];
        for (key, secs) in ceilings {
            if !(1..=MAX_TIMEOUT_SECS).contains(&secs) {
                return Err(format!(
                    "timeouts.{} must be between 1 and {} seconds, got {}",
                    key, MAX_TIMEOUT_SECS, secs
                ));
            }
        }
        Ok(())
    }
}

fn default_version_secs() -> u64 {
    10
}

fn default_identity_secs() -> u64 {
    30
}

/// Filesystem locations inspected by the checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Home directory override (defaults to the user's home)
    #[serde(default)]
    pub home: Option<PathBuf>,

    /// AWS CLI config file override (defaults to `<home>/.aws/config`)
    #[serde(default)]
    pub aws_config: Option<PathBuf>,

    #[serde(default = "default_identity_artifact")]
    pub identity_artifact: PathBuf,

    #[serde(default = "default_output_candidates")]
    pub output_candidates: Vec<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            home: None,
            aws_config: None,
            identity_artifact: default_identity_artifact(),
            output_candidates: default_output_candidates(),
        }
    }
}

fn default_identity_artifact() -> PathBuf {
    PathBuf::from(DEFAULT_IDENTITY_ARTIFACT)
}

fn default_output_candidates() -> Vec<PathBuf> {
    DEFAULT_OUTPUT_CANDIDATES.iter().map(PathBuf::from).collect()
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub const VALUES: &'static [&'static str] = &["auto", "always", "never"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub timeouts: TimeoutsConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load from an explicit file, the user config, or defaults, then apply env overrides
    pub fn load_or_default(explicit: Option<&Path>) -> VerifyResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Resolve into the concrete values the checks run against.
    pub fn settings(&self) -> VerifyResult<Settings> {
        let home = match &self.paths.home {
            Some(home) => home.clone(),
            None => dirs::home_dir().ok_or(VerifyError::NoHomeDir)?,
        };
        self.timeouts.validate().map_err(VerifyError::InvalidSettings)?;
        Ok(self.settings_with_home(home))
    }

    fn settings_with_home(&self, home: PathBuf) -> Settings {
        let aws_config = self
            .paths
            .aws_config
            .clone()
            .unwrap_or_else(|| home.join(".aws").join("config"));

        Settings {
            home,
            aws_config,
            identity_artifact: self.paths.identity_artifact.clone(),
            output_candidates: self.paths.output_candidates.clone(),
            sso_util: self.tools.sso_util.clone(),
            aws_cli: self.tools.aws_cli.clone(),
            version_timeout: Duration::from_secs(self.timeouts.version_secs),
            identity_timeout: Duration::from_secs(self.timeouts.identity_secs),
        }
    }
}

/// Fully resolved inputs for a verification run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub home: PathBuf,
    pub aws_config: PathBuf,
    pub identity_artifact: PathBuf,
    pub output_candidates: Vec<PathBuf>,
    pub sso_util: String,
    pub aws_cli: String,
    pub version_timeout: Duration,
    pub identity_timeout: Duration,
}

impl Settings {
    /// Settings rooted at `home`, everything else at defaults.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Config::default().settings_with_home(home.into())
    }

    /// Token cache written by `aws sso login` and `aws-sso-util login`
    pub fn sso_cache_dir(&self) -> PathBuf {
        self.home.join(".aws").join("sso").join("cache")
    }

    /// Credential cache of the AWS CLI
    pub fn cli_cache_dir(&self) -> PathBuf {
        self.home.join(".aws").join("cli").join("cache")
    }

    /// File name of the identity artifact, for messages
    pub fn identity_artifact_name(&self) -> String {
        self.identity_artifact
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.identity_artifact.display().to_string())
    }
}
