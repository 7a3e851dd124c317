//! Configuration for sso-verify
//!
//! Settings are layered, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (SSO_VERIFY_*)
//! 3. Config file (`--config <FILE>` or `<config_dir>/sso-verify/config.toml`)
//! 4. Built-in defaults

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{user_config_path, ConfigWarning};
pub use types::{
    ColorMode, Config, OutputConfig, PathsConfig, Settings, TimeoutsConfig, ToolsConfig,
    DEFAULT_IDENTITY_ARTIFACT, DEFAULT_OUTPUT_CANDIDATES, MAX_TIMEOUT_SECS,
};
