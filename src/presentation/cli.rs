//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ColorMode;
use crate::verify::CheckId;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// Verify an AWS SSO login workflow set up with aws-sso-util
#[derive(Parser, Debug)]
#[command(name = "sso-verify")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Exits 0 when every check passes. Warnings never fail the run.")]
pub struct Cli {
    /// Configuration file (default: <config dir>/sso-verify/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Skip a check (can be specified multiple times)
    #[arg(long, value_enum, value_name = "CHECK")]
    pub skip: Vec<CheckId>,

    /// List the checks and exit
    #[arg(long)]
    pub list: bool,
}
