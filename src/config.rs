//! Build configuration.
//!
//! All environment-sourced settings are read once into an explicit
//! [`BuildConfig`] and passed by reference into each component, so nothing in
//! the core consults ambient process state.

use std::path::PathBuf;

use crate::jdk::version::VersionRegistry;
use crate::util::diagnostic::MissingStackError;

/// Default base URL for JDK artifacts.
pub const DEFAULT_JDK_BASE_URL: &str = "https://lang-jvm.s3.amazonaws.com/jdk";

/// Configuration for one build invocation.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Target OS/runtime image family, required for artifact URLs.
    pub stack: Option<String>,

    /// Override for the JDK artifact base URL.
    pub jdk_base_url: Option<String>,

    /// Explicit local path to a Maven settings file.
    pub settings_path: Option<PathBuf>,

    /// URL to download a Maven settings file from.
    pub settings_url: Option<String>,

    /// Full replacement for the default Maven goals.
    pub custom_goals: Option<String>,

    /// Extra Maven options, appended to the baseline set.
    pub custom_opts: Option<String>,

    /// Registry of default JDK releases per major version.
    pub registry: VersionRegistry,
}

impl BuildConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        BuildConfig {
            stack: std::env::var("STACK").ok(),
            jdk_base_url: std::env::var("DEFAULT_JDK_BASE_URL").ok(),
            settings_path: std::env::var("MAVEN_SETTINGS_PATH").ok().map(PathBuf::from),
            settings_url: std::env::var("MAVEN_SETTINGS_URL").ok(),
            custom_goals: std::env::var("MAVEN_CUSTOM_GOALS").ok(),
            custom_opts: std::env::var("MAVEN_CUSTOM_OPTS").ok(),
            registry: VersionRegistry::default(),
        }
    }

    /// The JDK artifact base URL, honoring the override.
    pub fn jdk_base_url(&self) -> &str {
        self.jdk_base_url.as_deref().unwrap_or(DEFAULT_JDK_BASE_URL)
    }

    /// The stack identifier, or a configuration error when unset.
    pub fn stack(&self) -> Result<&str, MissingStackError> {
        self.stack.as_deref().ok_or(MissingStackError)
    }
}
