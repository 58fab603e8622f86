//! Maven command resolution and invocation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::BuildConfig;
use crate::delegate::Delegate;
use crate::layers::Layers;
use crate::maven::repo::RepoCacheGuard;
use crate::maven::settings::resolve_settings;
use crate::util::diagnostic::MavenBuildError;
use crate::util::process::ProcessBuilder;

/// Goals run when neither the caller nor configuration overrides them.
pub const DEFAULT_GOALS: &str = "clean install";

/// Options every invocation starts from.
pub const BASELINE_OPTIONS: &[&str] = &["-B", "-DoutputFile=target/dependencies.txt"];

/// A fully resolved build invocation. Rebuilt on every run, never persisted.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub command: PathBuf,
    pub options: Vec<String>,
    pub goals: Vec<String>,
}

/// Prepares and runs Maven for a project.
pub struct Runner<'a> {
    config: &'a BuildConfig,
    delegate: &'a dyn Delegate,
    m2_dir: Option<PathBuf>,
}

impl<'a> Runner<'a> {
    pub fn new(config: &'a BuildConfig, delegate: &'a dyn Delegate) -> Self {
        Runner {
            config,
            delegate,
            m2_dir: None,
        }
    }

    /// Redirect a specific repository path instead of `~/.m2`.
    pub fn with_m2_dir(mut self, m2_dir: impl Into<PathBuf>) -> Self {
        self.m2_dir = Some(m2_dir.into());
        self
    }

    /// Resolve the command, options and goals for a project.
    ///
    /// The only filesystem effects are making a vendored wrapper executable
    /// and installing Maven into its layer when no wrapper exists.
    pub fn prepare(
        &self,
        app_dir: &Path,
        default_goals: &str,
        extra_options: &[String],
        layers: &Layers,
    ) -> Result<Invocation> {
        let command = self.resolve_command(app_dir, layers)?;
        let options = self.construct_options(app_dir, extra_options)?;
        let goals = self.construct_goals(default_goals);

        Ok(Invocation {
            command,
            options,
            goals,
        })
    }

    /// Run the build: options then goals, working directory = project dir,
    /// standard streams inherited. The repository redirection is released on
    /// every exit path.
    pub fn run(
        &self,
        app_dir: &Path,
        default_goals: &str,
        extra_options: &[String],
        layers: &Layers,
        extra_env: &[(String, String)],
    ) -> Result<()> {
        let invocation = self.prepare(app_dir, default_goals, extra_options, layers)?;

        let _guard = match &self.m2_dir {
            Some(dir) => RepoCacheGuard::acquire_at(dir.clone(), layers)?,
            None => RepoCacheGuard::acquire(layers)?,
        };

        println!(
            "$ mvn {} {}",
            invocation.options.join(" "),
            invocation.goals.join(" ")
        );

        let mut process = ProcessBuilder::new(&invocation.command)
            .args(&invocation.options)
            .args(&invocation.goals)
            .cwd(app_dir);
        for (key, value) in extra_env {
            process = process.env(key, value);
        }

        let status = process.status()?;
        if !status.success() {
            return Err(MavenBuildError {
                cause: format!(
                    "`{}` exited with code {:?}",
                    process.display_command(),
                    status.code()
                ),
            }
            .into());
        }

        Ok(())
    }

    /// A project-vendored wrapper wins over an installed Maven, but only when
    /// all three wrapper pieces are present.
    fn resolve_command(&self, app_dir: &Path, layers: &Layers) -> Result<PathBuf> {
        if has_maven_wrapper(app_dir) {
            let mvnw = app_dir.join("mvnw");
            make_executable(&mvnw)?;
            Ok(mvnw)
        } else {
            let maven_layer = layers.layer("maven");
            self.delegate.install_maven(maven_layer.root())
        }
    }

    fn construct_options(&self, app_dir: &Path, extra: &[String]) -> Result<Vec<String>> {
        let mut opts: Vec<String> = BASELINE_OPTIONS.iter().map(|s| s.to_string()).collect();
        opts.extend(extra.iter().cloned());
        opts.extend(resolve_settings(self.config, app_dir)?.to_options());

        if let Some(custom) = &self.config.custom_opts {
            opts.extend(split_args(custom));
        }

        Ok(trim_args(opts))
    }

    /// Custom goals replace the defaults wholesale; there is no merging.
    fn construct_goals(&self, default_goals: &str) -> Vec<String> {
        match &self.config.custom_goals {
            Some(goals) => split_args(goals),
            None => split_args(default_goals),
        }
    }
}

/// Check for a complete vendored Maven wrapper.
pub fn has_maven_wrapper(app_dir: &Path) -> bool {
    app_dir.join("mvnw").exists()
        && app_dir.join(".mvn/wrapper/maven-wrapper.jar").exists()
        && app_dir.join(".mvn/wrapper/maven-wrapper.properties").exists()
}

fn split_args(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

fn trim_args(args: Vec<String>) -> Vec<String> {
    args.into_iter()
        .map(|arg| arg.trim().to_string())
        .filter(|arg| !arg.is_empty())
        .collect()
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)
        .with_context(|| format!("failed to stat wrapper: {}", path.display()))?
        .permissions();
    perms.set_mode(0o774);
    std::fs::set_permissions(path, perms)
        .with_context(|| format!("failed to make wrapper executable: {}", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
