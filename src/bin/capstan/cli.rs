//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Capstan - a buildpack-style JDK installer and Maven build preparer
#[derive(Parser)]
#[command(name = "capstan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve and install the project's JDK into the layer store
    InstallJdk(InstallJdkArgs),

    /// Install the JDK, then run the Maven build
    Build(BuildArgs),

    /// Show the launch processes detected for the project
    Detect(DetectArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct InstallJdkArgs {
    /// Layer store directory
    #[arg(long)]
    pub layers: PathBuf,

    /// Project directory
    #[arg(long, default_value = ".")]
    pub app_dir: PathBuf,

    /// Buildpack directory holding the profile.d scripts
    #[arg(long)]
    pub buildpack_dir: PathBuf,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Layer store directory
    #[arg(long)]
    pub layers: PathBuf,

    /// Project directory
    #[arg(long, default_value = ".")]
    pub app_dir: PathBuf,

    /// Buildpack directory holding the profile.d scripts
    #[arg(long)]
    pub buildpack_dir: PathBuf,

    /// Maven goals to run
    #[arg(long, default_value = "clean install")]
    pub goals: String,

    /// Extra Maven options, whitespace separated
    #[arg(long, default_value = "")]
    pub options: String,
}

#[derive(Args)]
pub struct DetectArgs {
    /// Project directory
    #[arg(long, default_value = ".")]
    pub app_dir: PathBuf,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
