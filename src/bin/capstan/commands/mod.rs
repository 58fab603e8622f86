//! Command implementations

pub mod build;
pub mod completions;
pub mod detect;
pub mod install_jdk;
