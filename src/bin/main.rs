#![warn(rust_2018_idioms)]

use std::{
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use anyhow::{Context, Result};
use diskspace::{
    check::{self, CheckError},
    disk,
    options::{args, init_options, QueryOptions},
};

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("diskspace: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Reports on every configured path, returning whether all of them succeeded.
fn run() -> Result<bool> {
    let args = args::get_args();

    #[cfg(feature = "logging")]
    {
        diskspace::utils::logging::init_logger(
            log::LevelFilter::Debug,
            args.general_args
                .log_file
                .as_deref()
                .map(std::ffi::OsStr::new),
        )?;
    }

    let options =
        init_options(&args).context("Unable to properly parse the config file or the arguments.")?;
    diskspace::debug!("Running with {options:?}");

    let mut stdout = io::stdout().lock();
    let mut all_ok = true;

    for path in &options.paths {
        match report(path, &options) {
            Ok(line) => writeln!(stdout, "{line}")?,
            Err(err) => {
                all_ok = false;
                let err = anyhow::Error::from(err);
                diskspace::error!("{err:#}");
                eprintln!("diskspace: {err:#}");
            }
        }
    }

    Ok(all_ok)
}

/// Queries `path` and formats its output line, running the space check if one
/// was asked for.
fn report(path: &Path, options: &QueryOptions) -> Result<String, CheckError> {
    let usage = if options.file {
        disk::query_usage_for_file(path)?
    } else {
        disk::query_usage(path)?
    };

    if let Some(requirement) = options.requirement {
        check::check_available(usage.available(), requirement, options.reserve)?;
    }

    let line = if options.usage {
        format!(
            "{}\t{}\t{}\t{}",
            usage.total(),
            usage.free(),
            usage.available(),
            path.display()
        )
    } else {
        format!("{}\t{}", usage.available(), path.display())
    };

    Ok(line)
}
