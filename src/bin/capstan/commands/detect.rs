//! `capstan detect` command

use anyhow::Result;

use capstan::launch::{jar, procfile};

use crate::cli::DetectArgs;

pub fn execute(args: DetectArgs) -> Result<()> {
    let procfile_path = args.app_dir.join("Procfile");

    // A Procfile is authoritative; otherwise fall back to sniffing the
    // built jar.
    let processes = if procfile_path.exists() {
        procfile::parse(&procfile_path)?
    } else {
        jar::find_executable_jar(&args.app_dir)?
    };

    if processes.is_empty() {
        eprintln!("no launch processes detected");
        return Ok(());
    }

    for process in processes {
        println!("{}: {}", process.name, process.command);
    }

    Ok(())
}
