//! Test helpers shared across crates.
//!
//! Provides temporary project trees laid out like the dashboard repository
//! and a wrapper around [`figment::Jail`] for configuration tests.

pub mod jail;
pub mod project;
