//! Process-type metadata for the launch phase.

use serde::Serialize;

pub mod jar;
pub mod procfile;

/// A named launch process and its command line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Process {
    pub name: String,
    pub command: String,
}
