//! `capstan install-jdk` command

use anyhow::Result;

use capstan::{BuildConfig, CommandDelegate, Installer, Layers};

use crate::cli::InstallJdkArgs;

pub fn execute(args: InstallJdkArgs) -> Result<()> {
    let config = BuildConfig::from_env();
    let delegate = CommandDelegate;
    let layers = Layers::new(&args.layers);

    let installer = Installer::new(&config, &delegate, &args.buildpack_dir);
    let jdk = installer.install(&args.app_dir, &layers)?;

    println!("Java {} installed", jdk.version.tag);

    Ok(())
}
