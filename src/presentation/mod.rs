//! Presentation Layer
//!
//! CLI argument parsing lives here so the binary and the integration tests
//! share one definition of the command line.

pub mod cli;

pub use cli::{Cli, ColorWhen};
