//! Property tests for sso-verify.
//!
//! Randomized inputs protect the parsing invariants: scans never panic and
//! equivalent artifact layouts resolve to the same identities.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/profile_headers.rs"]
mod profile_headers;

#[path = "properties/identity_lookup.rs"]
mod identity_lookup;
