//! Shared utilities

pub mod diagnostic;
pub mod fs;
pub mod process;
pub mod props;

pub use process::ProcessBuilder;
