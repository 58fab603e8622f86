//! Scoped redirection of the per-user Maven repository.
//!
//! For the duration of one build, `~/.m2` is a symlink into a persistent
//! cache layer. The guard releases the redirection on every exit path, and
//! only if the path is still a symlink: if the build replaced it with a real
//! directory, destroying that would lose user data, so it is left alone.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::layers::Layers;
use crate::util::fs::{ensure_dir, symlink};

/// RAII guard over the repository redirection.
#[derive(Debug)]
pub struct RepoCacheGuard {
    m2_dir: PathBuf,
}

impl RepoCacheGuard {
    /// Redirect the default per-user repository (`~/.m2`) into the
    /// `maven_m2` cache layer.
    pub fn acquire(layers: &Layers) -> Result<Self> {
        let home = dirs::home_dir().context("could not find user home")?;
        Self::acquire_at(home.join(".m2"), layers)
    }

    /// Redirect an explicit repository path into the `maven_m2` cache layer,
    /// creating the layer directory if absent.
    pub fn acquire_at(m2_dir: PathBuf, layers: &Layers) -> Result<Self> {
        let layer = layers.layer("maven_m2");
        ensure_dir(layer.root())?;

        symlink(layer.root(), &m2_dir).with_context(|| {
            format!(
                "failed to redirect maven repository: {}",
                m2_dir.display()
            )
        })?;

        Ok(RepoCacheGuard { m2_dir })
    }

    /// The redirected repository path.
    pub fn m2_dir(&self) -> &Path {
        &self.m2_dir
    }
}

impl Drop for RepoCacheGuard {
    fn drop(&mut self) {
        if let Ok(meta) = std::fs::symlink_metadata(&self.m2_dir) {
            if meta.file_type().is_symlink() {
                let _ = std::fs::remove_file(&self.m2_dir);
            }
        }
    }
}
