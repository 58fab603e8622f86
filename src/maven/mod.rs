//! Maven build preparation and invocation.
//!
//! Settings, goals and options resolve through fixed precedence chains, the
//! per-user repository is redirected into a cache layer for the duration of
//! one run, and the build itself is a single foreground subprocess.

pub mod repo;
pub mod runner;
pub mod settings;

pub use repo::RepoCacheGuard;
pub use runner::{Invocation, Runner, DEFAULT_GOALS};
pub use settings::SettingsResolution;
