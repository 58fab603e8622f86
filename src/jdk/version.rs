//! JDK version string resolution.
//!
//! Raw version strings arrive in many historical shapes (`11`, `1.8`,
//! `1.8.0_181`, `9+181`, `zulu-1.8.0_191`, ...). Resolution runs an ordered
//! rule table; order matters because later patterns are more permissive and
//! would otherwise capture inputs belonging to earlier rules.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::util::diagnostic::InvalidVersionError;

/// A canonical JDK version: a fetchable `tag` for a `vendor`, plus the major
/// release derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// String-encoded major release, e.g. `"8"`.
    pub major: String,
    /// Vendor-specific full version string, e.g. `"1.8.0_212"`.
    pub tag: String,
    /// Artifact vendor, e.g. `"openjdk"` or `"zulu-"`.
    pub vendor: String,
}

/// Registry of default full releases per major version.
///
/// This is explicit configuration rather than a hidden constant so tests and
/// callers can substitute their own release table.
#[derive(Debug, Clone)]
pub struct VersionRegistry {
    defaults: BTreeMap<String, String>,
    pub default_vendor: String,
    pub default_major: String,
}

impl Default for VersionRegistry {
    fn default() -> Self {
        let defaults = [
            ("8", "1.8.0_212"),
            ("9", "9.0.4"),
            ("10", "10.0.2"),
            ("11", "11.0.3"),
            ("12", "12.0.1"),
        ]
        .into_iter()
        .map(|(major, tag)| (major.to_string(), tag.to_string()))
        .collect();

        VersionRegistry {
            defaults,
            default_vendor: "openjdk".to_string(),
            default_major: "8".to_string(),
        }
    }
}

impl VersionRegistry {
    /// The registered default full release for a major version.
    pub fn default_tag(&self, major: &str) -> Option<&str> {
        self.defaults.get(major).map(String::as_str)
    }

    /// Register (or replace) the default full release for a major version.
    pub fn set_default(&mut self, major: impl Into<String>, tag: impl Into<String>) {
        self.defaults.insert(major.into(), tag.into());
    }

    /// The version used when a project pins nothing.
    pub fn default_version(&self) -> Result<Version, InvalidVersionError> {
        let tag = registry_default(self, &self.default_major, &self.default_major)?;
        resolve(self, &tag)
    }
}

type Handler = fn(&VersionRegistry, &str, &Captures<'_>) -> Result<Version, InvalidVersionError>;

struct Rule {
    pattern: Regex,
    apply: Handler,
}

/// Resolution rules in precedence order.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let rule = |pattern: &str, apply: Handler| Rule {
        pattern: Regex::new(pattern).expect("static version rule pattern"),
        apply,
    };

    vec![
        // 1. Bare major-version shorthand: resolve the registered default
        //    release for that major.
        rule(r"^(10|11)$", |registry, raw, caps| {
            let tag = registry_default(registry, &caps[1], raw)?;
            resolve(registry, &tag)
        }),
        // 2. Dotted two-digit major: the input is already a full tag.
        rule(r"^(1[0-9])\.", |registry, raw, caps| {
            Ok(Version {
                major: caps[1].to_string(),
                tag: raw.to_string(),
                vendor: registry.default_vendor.clone(),
            })
        }),
        // 3. Legacy `1.x` with nothing trailing: substitute the registered
        //    default release, not the literal input.
        rule(r"^1\.([7-9])$", |registry, raw, caps| {
            let major = caps[1].to_string();
            let tag = registry_default(registry, &major, raw)?;
            Ok(Version {
                major,
                tag,
                vendor: registry.default_vendor.clone(),
            })
        }),
        // 4. Bare single-digit legacy major, same substitution.
        rule(r"^([7-9])$", |registry, raw, caps| {
            let major = caps[1].to_string();
            let tag = registry_default(registry, &major, raw)?;
            Ok(Version {
                major,
                tag,
                vendor: registry.default_vendor.clone(),
            })
        }),
        // 5. Legacy `1.x` with trailing content: the input is a full tag.
        rule(r"^1\.([7-9])", |registry, raw, caps| {
            Ok(Version {
                major: caps[1].to_string(),
                tag: raw.to_string(),
                vendor: registry.default_vendor.clone(),
            })
        }),
        // 6. Early-access identifiers for 9, normalized to the `9-181`
        //    artifact tag. Historical quirk, preserved exactly.
        rule(r"^(9\+181|9\.0\.0)$", |registry, _raw, _caps| {
            Ok(Version {
                major: "9".to_string(),
                tag: "9-181".to_string(),
                vendor: registry.default_vendor.clone(),
            })
        }),
        // 7. Any other `9.` release.
        rule(r"^9\.", |registry, raw, _caps| {
            Ok(Version {
                major: "9".to_string(),
                tag: raw.to_string(),
                vendor: registry.default_vendor.clone(),
            })
        }),
        // 8. Vendor-prefixed forms carry the vendor explicitly; the major is
        //    recovered from the remainder.
        rule(r"^zulu-(.*)$", |_registry, _raw, caps| {
            Ok(Version {
                major: major_from_tag(&caps[1]),
                tag: caps[1].to_string(),
                vendor: "zulu-".to_string(),
            })
        }),
        rule(r"^openjdk-(.*)$", |_registry, _raw, caps| {
            Ok(Version {
                major: major_from_tag(&caps[1]),
                tag: caps[1].to_string(),
                vendor: "openjdk".to_string(),
            })
        }),
    ]
});

/// Resolve a raw version string into a canonical [`Version`].
///
/// The first matching rule wins; a string matching no rule is an invalid
/// version.
pub fn resolve(registry: &VersionRegistry, raw: &str) -> Result<Version, InvalidVersionError> {
    for rule in RULES.iter() {
        if let Some(caps) = rule.pattern.captures(raw) {
            return (rule.apply)(registry, raw, &caps);
        }
    }
    Err(InvalidVersionError {
        version: raw.to_string(),
    })
}

fn registry_default(
    registry: &VersionRegistry,
    major: &str,
    raw: &str,
) -> Result<String, InvalidVersionError> {
    registry
        .default_tag(major)
        .map(str::to_string)
        .ok_or_else(|| InvalidVersionError {
            version: raw.to_string(),
        })
}

/// Extract the major version from a vendor tag.
///
/// Prefixes are checked in this exact order; anything unrecognized is passed
/// through as the literal major.
fn major_from_tag(tag: &str) -> String {
    const PREFIXES: &[(&str, &str)] = &[
        ("1.7", "7"),
        ("1.8", "8"),
        ("1.9", "9"),
        ("7", "7"),
        ("8", "8"),
        ("9", "9"),
        ("10", "10"),
        ("11", "11"),
        ("12", "12"),
    ];

    for (prefix, major) in PREFIXES {
        if tag.starts_with(prefix) {
            return (*major).to_string();
        }
    }
    tag.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> VersionRegistry {
        VersionRegistry::default()
    }

    #[test]
    fn test_resolve_full_tag() {
        let v = resolve(&registry(), "10.0.2").unwrap();
        assert_eq!(v.major, "10");
        assert_eq!(v.tag, "10.0.2");
        assert_eq!(v.vendor, "openjdk");
    }

    #[test]
    fn test_resolve_bare_shorthand() {
        let v = resolve(&registry(), "11").unwrap();
        assert_eq!(v.major, "11");
        assert_eq!(v.tag, "11.0.3");
        assert_eq!(v.vendor, "openjdk");

        let v = resolve(&registry(), "10").unwrap();
        assert_eq!(v.tag, "10.0.2");
    }

    #[test]
    fn test_resolve_legacy_exact() {
        let v = resolve(&registry(), "1.8").unwrap();
        assert_eq!(v.major, "8");
        assert_eq!(v.tag, "1.8.0_212");
        assert_eq!(v.vendor, "openjdk");
    }

    #[test]
    fn test_resolve_bare_legacy() {
        let v = resolve(&registry(), "8").unwrap();
        assert_eq!(v.major, "8");
        assert_eq!(v.tag, "1.8.0_212");
    }

    #[test]
    fn test_resolve_legacy_with_suffix() {
        let v = resolve(&registry(), "1.8.0_181").unwrap();
        assert_eq!(v.major, "8");
        assert_eq!(v.tag, "1.8.0_181");
    }

    #[test]
    fn test_resolve_early_access_quirk() {
        for raw in ["9+181", "9.0.0"] {
            let v = resolve(&registry(), raw).unwrap();
            assert_eq!(v.major, "9");
            assert_eq!(v.tag, "9-181");
            assert_eq!(v.vendor, "openjdk");
        }
    }

    #[test]
    fn test_resolve_nine_prefix() {
        let v = resolve(&registry(), "9.0.4").unwrap();
        assert_eq!(v.major, "9");
        assert_eq!(v.tag, "9.0.4");
    }

    #[test]
    fn test_resolve_zulu() {
        let v = resolve(&registry(), "zulu-1.8.0_191").unwrap();
        assert_eq!(v.major, "8");
        assert_eq!(v.tag, "1.8.0_191");
        assert_eq!(v.vendor, "zulu-");
    }

    #[test]
    fn test_resolve_openjdk_prefixed() {
        let v = resolve(&registry(), "openjdk-11.0.3").unwrap();
        assert_eq!(v.major, "11");
        assert_eq!(v.tag, "11.0.3");
        assert_eq!(v.vendor, "openjdk");
    }

    #[test]
    fn test_resolve_garbage_fails() {
        assert!(resolve(&registry(), "1bh").is_err());
        assert!(resolve(&registry(), "").is_err());
        assert!(resolve(&registry(), "latest").is_err());
    }

    #[test]
    fn test_resolve_idempotent_on_tags() {
        // Resolving a resolved tag keeps major and vendor stable.
        let registry = registry();
        for raw in ["1.8", "8", "11", "10.0.2", "1.8.0_181", "9.0.4"] {
            let first = resolve(&registry, raw).unwrap();
            let second = resolve(&registry, &first.tag).unwrap();
            assert_eq!(first.major, second.major, "major drifted for {raw}");
            assert_eq!(first.vendor, second.vendor, "vendor drifted for {raw}");
        }
    }

    #[test]
    fn test_registry_override() {
        let mut registry = registry();
        registry.set_default("11", "11.0.9");

        let v = resolve(&registry, "11").unwrap();
        assert_eq!(v.tag, "11.0.9");
    }

    #[test]
    fn test_default_version() {
        let v = registry().default_version().unwrap();
        assert_eq!(v.major, "8");
        assert_eq!(v.tag, "1.8.0_212");
    }

    #[test]
    fn test_major_from_tag_fallback() {
        assert_eq!(major_from_tag("13.0.1"), "13.0.1");
        assert_eq!(major_from_tag("1.7.0_262"), "7");
        assert_eq!(major_from_tag("12.0.1"), "12");
    }
}
