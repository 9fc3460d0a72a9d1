//! Build script used by diskspace to generate completion files and a manpage.

use std::{
    env, fs,
    io::Result,
    path::{Path, PathBuf},
};

use clap::Command;
use clap_complete::{generate_to, shells::Shell, Generator};
use clap_complete_fig::Fig;
use clap_complete_nushell::Nushell;

#[allow(dead_code)]
#[path = "src/options/args.rs"]
mod args;

/// The binary name.
const BIN_NAME: &str = "diskspace";

fn create_dir(dir: &Path) -> Result<()> {
    let res = fs::create_dir_all(dir);
    match &res {
        Ok(()) => {}
        Err(err) => {
            eprintln!("Failed to create a directory at location {dir:?}, encountered error {err:?}.  Aborting...");
        }
    }

    res
}

fn generate_completions<G>(to_generate: G, cmd: &mut Command, out_dir: &Path) -> Result<()>
where
    G: Generator,
{
    generate_to(to_generate, cmd, BIN_NAME, out_dir)?;

    Ok(())
}

fn generate_manpage(cmd: Command, out_dir: &Path) -> Result<()> {
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;
    fs::write(out_dir.join(format!("{BIN_NAME}.1")), buffer)?;

    Ok(())
}

fn main() -> Result<()> {
    const COMPLETION_DIR: &str = "./target/tmp/diskspace/completion/";
    const MANPAGE_DIR: &str = "./target/tmp/diskspace/manpage/";

    match env::var_os("DISKSPACE_GENERATE") {
        Some(var) if !var.is_empty() => {
            let completion_out_dir = PathBuf::from(COMPLETION_DIR);
            let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

            create_dir(&completion_out_dir)?;
            create_dir(&manpage_out_dir)?;

            let mut cmd = args::build_cmd();
            generate_completions(Shell::Bash, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::Zsh, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::Fish, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::PowerShell, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::Elvish, &mut cmd, &completion_out_dir)?;
            generate_completions(Fig, &mut cmd, &completion_out_dir)?;
            generate_completions(Nushell, &mut cmd, &completion_out_dir)?;

            generate_manpage(cmd, &manpage_out_dir)?;
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed=DISKSPACE_GENERATE");

    Ok(())
}
