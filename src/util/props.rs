//! Minimal Java `.properties` file reading.
//!
//! Only the `key=value` subset used by `system.properties` is supported;
//! continuation lines and escapes are not.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

/// Parsed properties, keyed by trimmed property name.
pub type Properties = HashMap<String, String>;

/// Read a properties file into a key/value map.
///
/// Lines without an `=` separator or with an empty key are skipped.
pub fn read_properties_file(path: &Path) -> Result<Properties> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read properties file: {}", path.display()))?;

    let mut props = Properties::new();
    for line in contents.lines() {
        if let Some(equal) = line.find('=') {
            let key = line[..equal].trim();
            if key.is_empty() {
                continue;
            }
            let value = line[equal + 1..].trim();
            props.insert(key.to_string(), value.to_string());
        }
    }

    Ok(props)
}
