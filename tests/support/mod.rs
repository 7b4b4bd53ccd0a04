#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// Three-record fixture shared by the scenario tests.
pub const SCENARIO: &str = "\
CMS:course A:1/1/2020:principiante
CMS:course B:2/2/2019:avanzado
BASES DE DATOS:course C:3/3/2021:avanzado
";

// Writes `contents` to a temp file that is removed when the handle drops.
pub fn course_file(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("creating course fixture")?;
    file.write_all(contents.as_bytes())
        .context("writing course fixture")?;
    file.flush()?;
    Ok(file)
}

pub fn catalog_command(input: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_course-catalog"));
    cmd.arg("--input")
        .arg(input)
        .env_remove("COURSE_CATALOG_INPUT");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd.output().context("failed to spawn course-catalog")?;
    if !output.status.success() {
        bail!(
            "command {:?} failed: {}",
            cmd,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}
