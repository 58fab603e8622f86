//! Test utilities and mocks for Capstan unit tests.
//!
//! Only compiled for tests. Provides a mock delegate that fabricates layer
//! contents instead of spawning fetcher/installer subprocesses, plus fixture
//! builders for common project shapes.

use std::cell::Cell;
use std::path::{Path, PathBuf};

use anyhow::Result;
use url::Url;

use crate::delegate::Delegate;

pub mod fixtures;

pub use fixtures::{app_with_wrapper, buildpack_fixture};

/// Delegate that fabricates install results in-process.
#[derive(Debug, Default)]
pub struct MockDelegate {
    with_jre: bool,
    available: Cell<bool>,
    fetches: Cell<u32>,
    maven_installs: Cell<u32>,
}

impl MockDelegate {
    pub fn new() -> Self {
        MockDelegate {
            with_jre: false,
            available: Cell::new(true),
            fetches: Cell::new(0),
            maven_installs: Cell::new(0),
        }
    }

    /// Fabricated JDKs get a pre-9 style `jre/` subdirectory.
    pub fn with_jre(mut self) -> Self {
        self.with_jre = true;
        self
    }

    /// Report every artifact URL as unreachable.
    pub fn unavailable(self) -> Self {
        self.available.set(false);
        self
    }

    /// Number of JDK fetches performed.
    pub fn fetches(&self) -> u32 {
        self.fetches.get()
    }

    /// Number of Maven installs performed.
    pub fn maven_installs(&self) -> u32 {
        self.maven_installs.get()
    }
}

impl Delegate for MockDelegate {
    fn fetch_jdk(&self, _url: &Url, dest: &Path) -> Result<()> {
        self.fetches.set(self.fetches.get() + 1);

        std::fs::create_dir_all(dest.join("bin"))?;
        std::fs::write(dest.join("bin").join("java"), "#!/bin/sh\nexit 0\n")?;
        std::fs::create_dir_all(dest.join("lib").join("security"))?;
        std::fs::write(dest.join("lib").join("security").join("cacerts"), "certs")?;

        if self.with_jre {
            let jre = dest.join("jre");
            std::fs::create_dir_all(jre.join("bin"))?;
            std::fs::write(jre.join("bin").join("java"), "#!/bin/sh\nexit 0\n")?;
            std::fs::create_dir_all(jre.join("lib").join("security"))?;
            std::fs::write(jre.join("lib").join("security").join("cacerts"), "certs")?;
        }

        Ok(())
    }

    fn install_maven(&self, dest: &Path) -> Result<PathBuf> {
        self.maven_installs.set(self.maven_installs.get() + 1);

        let bin = dest.join("bin");
        std::fs::create_dir_all(&bin)?;
        std::fs::write(bin.join("mvn"), "#!/bin/sh\nexit 0\n")?;
        Ok(bin.join("mvn"))
    }

    fn jdk_available(&self, _url: &Url) -> bool {
        self.available.get()
    }
}
