//! Executable-jar sniffing.
//!
//! A built project with an executable jar under `target/` gets a `web`
//! process derived from its manifest: `Main-Class` makes it runnable,
//! `Start-Class` marks a Spring Boot style app that wants `$PORT` wired in.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::launch::Process;

/// Derive a `web` process from the first jar or war under `target/`.
///
/// A jar without a `Main-Class` yields no processes; no jar at all is an
/// error.
pub fn find_executable_jar(app_dir: &Path) -> Result<Vec<Process>> {
    let pattern = app_dir.join("target").join("*.[jw]ar");
    let jars = glob::glob(&pattern.to_string_lossy())
        .context("failed to scan target directory for jars")?;

    for jar in jars.flatten() {
        return detect_main_class(&jar);
    }

    bail!("could not find a Jar file")
}

fn detect_main_class(jar: &Path) -> Result<Vec<Process>> {
    let file = File::open(jar)
        .with_context(|| format!("unable to open Jar file: {}", jar.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("unable to open Jar file: {}", jar.display()))?;

    let mut manifest = String::new();
    match archive.by_name("META-INF/MANIFEST.MF") {
        Ok(mut entry) => {
            entry
                .read_to_string(&mut manifest)
                .context("unable to read Jar file")?;
        }
        Err(_) => return Ok(Vec::new()),
    }

    if !manifest.contains("Main-Class") {
        return Ok(Vec::new());
    }

    let mut command = "java".to_string();
    if manifest.contains("Start-Class") {
        command = format!("{command} -Dserver.port=$PORT");
    }
    let name = jar
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    command = format!("{command} -jar target/{name}");

    Ok(vec![Process {
        name: "web".to_string(),
        command,
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_jar(app_dir: &Path, name: &str, manifest: Option<&str>) {
        let target = app_dir.join("target");
        std::fs::create_dir_all(&target).unwrap();
        let file = File::create(target.join(name)).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();

        if let Some(manifest) = manifest {
            writer.start_file("META-INF/MANIFEST.MF", options).unwrap();
            writer.write_all(manifest.as_bytes()).unwrap();
        } else {
            writer.start_file("placeholder.txt", options).unwrap();
            writer.write_all(b"no manifest here").unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_plain_executable_jar() {
        let tmp = TempDir::new().unwrap();
        write_jar(tmp.path(), "app.jar", Some("Main-Class: com.example.Main\n"));

        let processes = find_executable_jar(tmp.path()).unwrap();
        assert_eq!(processes.len(), 1);
        assert_eq!(processes[0].name, "web");
        assert_eq!(processes[0].command, "java -jar target/app.jar");
    }

    #[test]
    fn test_spring_boot_jar_gets_port() {
        let tmp = TempDir::new().unwrap();
        write_jar(
            tmp.path(),
            "app.jar",
            Some("Main-Class: org.springframework.boot.loader.JarLauncher\nStart-Class: com.example.App\n"),
        );

        let processes = find_executable_jar(tmp.path()).unwrap();
        assert_eq!(
            processes[0].command,
            "java -Dserver.port=$PORT -jar target/app.jar"
        );
    }

    #[test]
    fn test_jar_without_main_class() {
        let tmp = TempDir::new().unwrap();
        write_jar(tmp.path(), "lib.jar", Some("Manifest-Version: 1.0\n"));

        let processes = find_executable_jar(tmp.path()).unwrap();
        assert!(processes.is_empty());
    }

    #[test]
    fn test_no_jar_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = find_executable_jar(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("could not find a Jar file"));
    }
}
