//! Capstan - a buildpack-style JDK installer and Maven build preparer
//!
//! This crate provides the core library functionality for Capstan:
//! resolving JDK versions, installing them into reusable cache layers,
//! and preparing and running Maven builds against those layers.

pub mod config;
pub mod delegate;
pub mod jdk;
pub mod launch;
pub mod layers;
pub mod maven;
pub mod util;

/// Test utilities and mocks for Capstan unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a mock delegate and fixture builders for
/// filesystem and subprocess scenarios.
#[cfg(test)]
pub mod test_support;

pub use config::BuildConfig;
pub use delegate::{CommandDelegate, Delegate};
pub use jdk::{Installer, Jdk, Version, VersionRegistry};
pub use layers::{Export, Layer, Layers};
pub use maven::Runner;
