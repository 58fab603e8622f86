//! JDK artifact URL construction and availability probing.

use anyhow::{Context, Result};
use url::Url;

use crate::config::BuildConfig;
use crate::jdk::version::Version;

/// Build the download URL for a resolved version:
/// `{base}/{stack}/{vendor}{tag}.tar.gz`.
///
/// Callers may hand us the bare vendor `"zulu"` even though parsed versions
/// carry `"zulu-"`, so the dash normalization happens here, not upstream.
/// A missing stack is a configuration error and fails before any URL is
/// formed.
pub fn version_url(config: &BuildConfig, version: &Version) -> Result<Url> {
    let stack = config.stack()?;

    let vendor = match version.vendor.as_str() {
        "zulu" => "zulu-",
        v => v,
    };

    let raw = format!(
        "{}/{}/{}{}.tar.gz",
        config.jdk_base_url(),
        stack,
        vendor,
        version.tag
    );
    Url::parse(&raw).with_context(|| format!("failed to build JDK URL: {raw}"))
}

/// Probe whether an artifact URL is fetchable.
///
/// Issues a single HEAD request; transport errors and any status >= 300 count
/// as unreachable. There is no retry: an unreachable artifact means the
/// version is wrong, and rewriting it is the remediation.
pub fn is_reachable(url: &Url) -> bool {
    match reqwest::blocking::Client::new().head(url.clone()).send() {
        Ok(response) => response.status().as_u16() < 300,
        Err(_) => false,
    }
}
