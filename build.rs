use std::{
    env, fs,
    io::Result,
    path::{Path, PathBuf},
};

use clap::Command;
use clap_complete::{generate_to, shells::Shell};

#[allow(dead_code)]
#[path = "src/options/args.rs"]
mod args;

const BIN_NAME: &str = "battstat";
const GENERATE_VAR: &str = "BATTSTAT_GENERATE";
const OUT_DIR: &str = "./target/tmp/battstat";

const SHELLS: [Shell; 5] = [
    Shell::Bash,
    Shell::Zsh,
    Shell::Fish,
    Shell::PowerShell,
    Shell::Elvish,
];

fn out_dir(name: &str) -> Result<PathBuf> {
    let dir = Path::new(OUT_DIR).join(name);
    fs::create_dir_all(&dir).map_err(|err| {
        eprintln!("Unable to create '{}': {err}", dir.display());
        err
    })?;

    Ok(dir)
}

fn write_completions(cmd: &mut Command) -> Result<()> {
    let dir = out_dir("completion")?;
    for shell in SHELLS {
        generate_to(shell, cmd, BIN_NAME, &dir)?;
    }

    Ok(())
}

fn write_manpage(cmd: Command) -> Result<()> {
    let dir = out_dir("manpage")?;
    let mut page = Vec::new();
    clap_mangen::Man::new(cmd.name(BIN_NAME)).render(&mut page)?;
    fs::write(dir.join(format!("{BIN_NAME}.1")), page)
}

fn main() -> Result<()> {
    println!("cargo:rerun-if-env-changed={GENERATE_VAR}");
    println!("cargo:rerun-if-changed=src/options/args.rs");

    let enabled = env::var_os(GENERATE_VAR).is_some_and(|var| !var.is_empty());
    if !enabled {
        return Ok(());
    }

    let mut cmd = args::build_cmd();
    write_completions(&mut cmd)?;
    write_manpage(cmd)
}
