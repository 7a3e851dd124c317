//! Common test utilities for sso-verify CLI tests.
//!
//! Provides `TestEnv`: an isolated machine layout (home, artifacts, fake
//! tools) plus helpers to run the binary against it.

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
