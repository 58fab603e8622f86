//! Cache layer store.
//!
//! A layer is a named, independently cacheable unit of installed software:
//! a directory under the store root plus a TOML sidecar recording export
//! flags and arbitrary metadata. The store itself is owned by the caller;
//! this module only reads and writes individual layers.
//!
//! Sidecar format:
//!
//! ```toml
//! build = true
//! cache = true
//! launch = false
//!
//! [metadata]
//! home = "/layers/jdk"
//!
//! [metadata.version]
//! major = "8"
//! tag = "1.8.0_212"
//! vendor = "openjdk"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::util::fs::{ensure_dir, remove_dir_all_if_exists, write_string};

/// Downstream phases a layer is exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Export {
    Build,
    Cache,
    Launch,
}

/// A store of named layers rooted at one directory.
#[derive(Debug, Clone)]
pub struct Layers {
    root: PathBuf,
}

impl Layers {
    /// Wrap an existing store root. No filesystem access happens here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Layers { root: root.into() }
    }

    /// The store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Address the named layer within this store.
    pub fn layer(&self, name: &str) -> Layer {
        Layer {
            root: self.root.join(name),
            metadata_path: self.root.join(format!("{name}.toml")),
        }
    }
}

/// One addressable layer: a root directory and its metadata sidecar.
#[derive(Debug, Clone)]
pub struct Layer {
    root: PathBuf,
    metadata_path: PathBuf,
}

/// On-disk sidecar: export flags at the top level, payload under `metadata`.
#[derive(Debug, Serialize, Deserialize)]
struct Sidecar<T> {
    build: bool,
    cache: bool,
    launch: bool,
    metadata: T,
}

impl Layer {
    /// The layer's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the metadata sidecar file.
    pub fn metadata_path(&self) -> &Path {
        &self.metadata_path
    }

    /// Read the layer's metadata payload, or `None` when no sidecar exists.
    pub fn read_metadata<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if !self.metadata_path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.metadata_path).with_context(|| {
            format!(
                "failed to read layer metadata: {}",
                self.metadata_path.display()
            )
        })?;
        let sidecar: Sidecar<T> = toml::from_str(&contents).with_context(|| {
            format!(
                "failed to parse layer metadata: {}",
                self.metadata_path.display()
            )
        })?;
        Ok(Some(sidecar.metadata))
    }

    /// Write the layer's metadata payload and export flags.
    pub fn write_metadata<T: Serialize>(&self, metadata: &T, exports: &[Export]) -> Result<()> {
        let sidecar = Sidecar {
            build: exports.contains(&Export::Build),
            cache: exports.contains(&Export::Cache),
            launch: exports.contains(&Export::Launch),
            metadata,
        };
        let contents = toml::to_string_pretty(&sidecar)
            .with_context(|| "failed to serialize layer metadata")?;
        write_string(&self.metadata_path, &contents)
    }

    /// Write a profile script into the layer's `profile.d` directory.
    pub fn write_profile_script(&self, name: &str, contents: &str) -> Result<()> {
        let profile_dir = self.root.join("profile.d");
        ensure_dir(&profile_dir)?;
        write_string(&profile_dir.join(name), contents)
    }

    /// Remove the metadata sidecar (if present) and then the layer root.
    ///
    /// This is the invalidation primitive: metadata goes first so a crash
    /// between the two steps leaves no sidecar pointing at missing content.
    pub fn remove(&self) -> Result<()> {
        if self.metadata_path.exists() {
            std::fs::remove_file(&self.metadata_path).with_context(|| {
                format!(
                    "failed to remove layer metadata: {}",
                    self.metadata_path.display()
                )
            })?;
        }
        remove_dir_all_if_exists(&self.root)
    }
}
