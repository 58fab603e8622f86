//! Maven settings resolution.
//!
//! Exactly one source wins, checked in precedence order: an explicit local
//! path from configuration, a configured download URL, a `settings.xml` at
//! the project root, or nothing.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::BuildConfig;
use crate::util::diagnostic::SettingsDownloadError;

/// Outcome of settings resolution; carries the path to pass via `-s`.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsResolution {
    /// Configured local path, used as-is.
    ExplicitPath(PathBuf),
    /// Fetched from a configured URL into the temp dir.
    Downloaded(PathBuf),
    /// `settings.xml` at the project root, addressed project-relative.
    ProjectLocal(PathBuf),
    /// No settings source; no `-s` option is emitted.
    None,
}

impl SettingsResolution {
    /// The `-s <path>` option pair, or nothing.
    pub fn to_options(&self) -> Vec<String> {
        match self {
            SettingsResolution::None => Vec::new(),
            SettingsResolution::ExplicitPath(path)
            | SettingsResolution::Downloaded(path)
            | SettingsResolution::ProjectLocal(path) => {
                vec!["-s".to_string(), path.display().to_string()]
            }
        }
    }
}

/// Resolve the settings source for a project. First match wins.
pub fn resolve_settings(config: &BuildConfig, app_dir: &Path) -> Result<SettingsResolution> {
    if let Some(path) = &config.settings_path {
        return Ok(SettingsResolution::ExplicitPath(path.clone()));
    }

    if let Some(url) = &config.settings_url {
        let dest = std::env::temp_dir().join("settings.xml");
        download_settings(url, &dest)?;
        return Ok(SettingsResolution::Downloaded(dest));
    }

    if app_dir.join("settings.xml").exists() {
        return Ok(SettingsResolution::ProjectLocal(PathBuf::from(
            "settings.xml",
        )));
    }

    Ok(SettingsResolution::None)
}

fn download_settings(url: &str, dest: &Path) -> Result<()> {
    let fail = |source: Box<dyn std::error::Error + Send + Sync>| SettingsDownloadError {
        url: url.to_string(),
        source,
    };

    let response = reqwest::blocking::get(url).map_err(|e| fail(Box::new(e)))?;
    let bytes = response.bytes().map_err(|e| fail(Box::new(e)))?;
    std::fs::write(dest, &bytes).map_err(|e| fail(Box::new(e)))?;

    if !dest.exists() {
        return Err(fail(Box::new(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "downloaded settings file is missing",
        )))
        .into());
    }
    Ok(())
}
