//! Procfile parsing.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::launch::Process;

/// Parse a Procfile (a YAML map of process name to command).
pub fn parse(path: &Path) -> Result<Vec<Process>> {
    if !path.exists() {
        bail!("could not find Procfile");
    }

    let data = std::fs::read_to_string(path).context("failed to read Procfile")?;
    let types: BTreeMap<String, String> =
        serde_yaml::from_str(&data).context("failed to parse Procfile")?;

    Ok(types
        .into_iter()
        .map(|(name, command)| Process { name, command })
        .collect())
}
