//! Trust store reconciliation.
//!
//! A host with a managed trust policy ships a combined cacerts file at a
//! well-known path; the JDK's bundled store is replaced with a symlink to it
//! so certificate updates land without reinstalling the JDK.

use std::path::Path;

use anyhow::{Context, Result};

use crate::jdk::install::Jdk;
use crate::util::fs::symlink;

/// System-wide Java trust store location.
pub const SYSTEM_CACERTS: &str = "/etc/ssl/certs/java/cacerts";

/// Point the installed JDK's trust store at the system store.
///
/// No system store means no custom trust policy: the JDK keeps its bundled
/// cacerts and this is a silent no-op.
pub fn install_certs(jdk: &Jdk) -> Result<()> {
    install_certs_with(jdk, Path::new(SYSTEM_CACERTS))
}

/// Like [`install_certs`], with the system store location injected.
pub fn install_certs_with(jdk: &Jdk, system_cacerts: &Path) -> Result<()> {
    if !system_cacerts.exists() {
        return Ok(());
    }

    // Pre-9 layouts keep cacerts under jre/; only the first candidate found
    // is replaced.
    let candidates = [
        jdk.home.join("jre").join("lib").join("security").join("cacerts"),
        jdk.home.join("lib").join("security").join("cacerts"),
    ];

    for cacerts in &candidates {
        if cacerts.exists() {
            std::fs::remove_file(cacerts).with_context(|| {
                format!("failed to remove bundled cacerts: {}", cacerts.display())
            })?;
            symlink(system_cacerts, cacerts).with_context(|| {
                format!("failed to link system cacerts: {}", cacerts.display())
            })?;
            break;
        }
    }

    Ok(())
}
