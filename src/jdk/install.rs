//! JDK installation and layer-cache reconciliation.
//!
//! Per run the JDK layer is in one of three states: no metadata (fresh
//! fetch), metadata matching the desired tag (reuse, the hot path), or stale
//! metadata (invalidate, then fresh fetch). A failed fresh install leaves
//! partial layer state on disk; the next run observes stale or missing
//! metadata and self-heals.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::BuildConfig;
use crate::delegate::Delegate;
use crate::jdk::certs;
use crate::jdk::url::version_url;
use crate::jdk::version::{resolve, Version};
use crate::layers::{Export, Layer, Layers};
use crate::util::diagnostic::UnreachableJdkError;
use crate::util::fs::{copy_dir_all, read_to_string};
use crate::util::props::read_properties_file;

/// Property consulted in `system.properties` to pin a JDK version.
pub const RUNTIME_VERSION_PROPERTY: &str = "java.runtime.version";

/// An installed JDK or JRE: where it lives and what it is.
///
/// Persisted as layer metadata and read back on the next invocation to
/// decide reuse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jdk {
    pub home: PathBuf,
    pub version: Version,
}

/// Installs a JDK into a layer store.
pub struct Installer<'a> {
    config: &'a BuildConfig,
    delegate: &'a dyn Delegate,
    buildpack_dir: PathBuf,
}

impl<'a> Installer<'a> {
    pub fn new(
        config: &'a BuildConfig,
        delegate: &'a dyn Delegate,
        buildpack_dir: impl Into<PathBuf>,
    ) -> Self {
        Installer {
            config,
            delegate,
            buildpack_dir: buildpack_dir.into(),
        }
    }

    /// Determine the JDK version for a project.
    ///
    /// `system.properties` at the project root may pin one via
    /// `java.runtime.version`; otherwise (including when the file is
    /// unreadable) the registry default applies.
    pub fn detect_version(&self, app_dir: &Path) -> Result<Version> {
        let props_file = app_dir.join("system.properties");
        if props_file.exists() {
            if let Ok(props) = read_properties_file(&props_file) {
                if let Some(raw) = props.get(RUNTIME_VERSION_PROPERTY) {
                    return Ok(resolve(&self.config.registry, raw)?);
                }
            }
        }
        Ok(self.config.registry.default_version()?)
    }

    /// Install the project's JDK, reusing a cached layer when its recorded
    /// tag matches the desired one.
    pub fn install(&self, app_dir: &Path, layers: &Layers) -> Result<Jdk> {
        let version = self.detect_version(app_dir)?;
        let url = version_url(self.config, &version)?;

        if !self.delegate.jdk_available(&url) {
            return Err(UnreachableJdkError {
                tag: version.tag,
                url: url.to_string(),
            }
            .into());
        }

        let jdk_layer = layers.layer("jdk");
        let jdk = Jdk {
            home: jdk_layer.root().to_path_buf(),
            version,
        };

        match jdk_layer.read_metadata::<Jdk>() {
            Ok(Some(cached)) if cached.version.tag == jdk.version.tag => {
                tracing::info!("JDK {} installed from cache", cached.version.tag);
                return Ok(cached);
            }
            Ok(Some(_)) => {
                tracing::debug!("removing expired JDK from cache");
                jdk_layer.remove()?;
            }
            Ok(None) => {
                tracing::debug!("no cached JDK detected");
            }
            Err(err) => {
                tracing::debug!("discarding unreadable JDK metadata: {err:#}");
                jdk_layer.remove()?;
            }
        }

        self.delegate.fetch_jdk(&url, jdk_layer.root())?;
        certs::install_certs(&jdk)?;
        self.write_profile_scripts(&jdk_layer)?;

        let overlay = app_dir.join(".jdk-overlay");
        if overlay.is_dir() {
            self.delegate.apply_overlay(jdk_layer.root(), &overlay)?;
        }

        tracing::info!("JDK {} installed", jdk.version.tag);

        // Any derived JRE from a previous install is rebuilt from scratch so
        // a JDK upgrade cannot leave stale JRE metadata behind.
        let jre_layer = layers.layer("jre");
        jre_layer.remove()?;

        let jre_dir = jdk_layer.root().join("jre");
        if jre_dir.is_dir() {
            // Pre-9 packaging bundles a standalone JRE; the launch image
            // carries only that minimal runtime.
            copy_dir_all(&jre_dir, jre_layer.root())
                .context("failed to extract JRE from JDK")?;

            let jre = Jdk {
                home: jre_layer.root().to_path_buf(),
                version: jdk.version.clone(),
            };
            jdk_layer.write_metadata(&jdk, &[Export::Cache, Export::Build])?;
            jre_layer.write_metadata(&jre, &[Export::Launch])?;
            tracing::info!("JRE {} added to launch image", jre.version.tag);
        } else {
            // 9+ ships no embeddable JRE; one layer serves every phase.
            jdk_layer.write_metadata(&jdk, &[Export::Build, Export::Cache, Export::Launch])?;
        }

        Ok(jdk)
    }

    fn write_profile_scripts(&self, layer: &Layer) -> Result<()> {
        for script in ["jvm.sh", "jdbc.sh"] {
            let contents = read_to_string(&self.buildpack_dir.join("profile.d").join(script))?;
            layer.write_profile_script(script, &contents)?;
        }
        Ok(())
    }
}
