//! `capstan build` command

use anyhow::Result;

use capstan::{BuildConfig, CommandDelegate, Installer, Layers, Runner};

use crate::cli::BuildArgs;

pub fn execute(args: BuildArgs) -> Result<()> {
    let config = BuildConfig::from_env();
    let delegate = CommandDelegate;
    let layers = Layers::new(&args.layers);

    println!("\n[Installing JDK]");
    let installer = Installer::new(&config, &delegate, &args.buildpack_dir);
    let jdk = installer.install(&args.app_dir, &layers)?;
    println!("Java {} installed", jdk.version.tag);

    // The JDK rides on the child's environment; the parent process stays
    // untouched.
    let path = std::env::var("PATH").unwrap_or_default();
    let env = vec![
        ("JAVA_HOME".to_string(), jdk.home.display().to_string()),
        (
            "PATH".to_string(),
            format!("{}/bin:{}", jdk.home.display(), path),
        ),
    ];

    println!("\n[Running Maven]");
    let extra_options: Vec<String> = args
        .options
        .split_whitespace()
        .map(str::to_string)
        .collect();

    Runner::new(&config, &delegate).run(&args.app_dir, &args.goals, &extra_options, &layers, &env)
}
