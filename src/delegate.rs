//! External collaborator capabilities.
//!
//! Fetching a JDK archive and installing Maven are delegated to external
//! executables; the overlay copy is an in-process directory copy. All of it
//! sits behind one trait so the reconciliation logic can be exercised without
//! spawning subprocesses or touching the network.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use url::Url;

use crate::jdk::url::is_reachable;
use crate::util::fs::copy_dir_all;
use crate::util::process::{find_executable, ProcessBuilder};

/// Capabilities the install/build flows delegate out.
pub trait Delegate {
    /// Fetch and unpack a JDK archive into `dest`.
    fn fetch_jdk(&self, url: &Url, dest: &Path) -> Result<()>;

    /// Install Maven into `dest`, returning the `mvn` binary path.
    fn install_maven(&self, dest: &Path) -> Result<PathBuf>;

    /// Copy a project overlay directory on top of an installed layer.
    fn apply_overlay(&self, layer_root: &Path, overlay: &Path) -> Result<()> {
        copy_dir_all(overlay, layer_root).with_context(|| {
            format!("failed to apply overlay: {}", overlay.display())
        })
    }

    /// Probe whether a JDK artifact exists behind `url`.
    fn jdk_available(&self, url: &Url) -> bool {
        is_reachable(url)
    }
}

/// Production delegate: spawns the external helper executables with
/// forwarded standard streams.
#[derive(Debug, Default)]
pub struct CommandDelegate;

impl CommandDelegate {
    /// Resolve a helper executable on PATH, falling back to the bare name so
    /// helpers shipped next to the current working directory still work.
    fn helper(name: &str) -> PathBuf {
        find_executable(name).unwrap_or_else(|| PathBuf::from(name))
    }
}

impl Delegate for CommandDelegate {
    fn fetch_jdk(&self, url: &Url, dest: &Path) -> Result<()> {
        ProcessBuilder::new(Self::helper("jdk-fetcher"))
            .arg(url.as_str())
            .arg(dest)
            .run()
            .context("failed to fetch JDK")
    }

    fn install_maven(&self, dest: &Path) -> Result<PathBuf> {
        ProcessBuilder::new(Self::helper("maven-installer"))
            .arg(dest)
            .run()
            .context("failed to install Maven")?;
        Ok(dest.join("bin").join("mvn"))
    }
}
