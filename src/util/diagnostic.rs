//! User-facing diagnostic errors.
//!
//! Configuration mistakes (bad version string, missing stack) get direct,
//! actionable messages; unexpected failures carry a support pointer instead.

use thiserror::Error;

use miette::Diagnostic as MietteDiagnostic;

/// An unparseable JDK version string.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("invalid JDK version: `{version}`")]
#[diagnostic(
    code(capstan::jdk::invalid_version),
    help("Set java.runtime.version in system.properties to a published JDK release, e.g. 11.0.3")
)]
pub struct InvalidVersionError {
    pub version: String,
}

/// The required stack identifier is absent from configuration.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("missing stack identifier")]
#[diagnostic(
    code(capstan::jdk::missing_stack),
    help("Set the STACK environment variable to the target image family, e.g. STACK=heroku-18")
)]
pub struct MissingStackError;

/// A resolved JDK version has no fetchable artifact behind its URL.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("invalid JDK version: {tag}\n  Caused by: failed to reach {url}")]
#[diagnostic(
    code(capstan::jdk::unreachable),
    help("Choose a published JDK release for this stack; rewriting the version is the fix, not retrying")
)]
pub struct UnreachableJdkError {
    pub tag: String,
    pub url: String,
}

/// settings.xml could not be downloaded from the configured URL.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("failed to download settings.xml from URL: {url}")]
#[diagnostic(
    code(capstan::maven::settings_download),
    help("We're sorry this build is failing! If you can't find the issue in your application code, please submit a support ticket so we can help.")
)]
pub struct SettingsDownloadError {
    pub url: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

/// The Maven subprocess exited with a failure status.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("failed to build app with Maven\n  Caused by: {cause}")]
#[diagnostic(
    code(capstan::maven::build_failed),
    help("We're sorry this build is failing! If you can't find the issue in your application code, please submit a support ticket so we can help.")
)]
pub struct MavenBuildError {
    pub cause: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = InvalidVersionError {
            version: "1bh".to_string(),
        };
        assert!(err.to_string().contains("invalid JDK version"));
        assert!(err.to_string().contains("1bh"));

        let err = UnreachableJdkError {
            tag: "11.0.99".to_string(),
            url: "https://example.com/jdk.tar.gz".to_string(),
        };
        assert!(err.to_string().contains("Caused by: failed to reach"));
    }
}
