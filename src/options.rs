//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use error::{OptionError, OptionResult};

use self::{args::Args, config::Config};
use crate::{
    check::{DiskRequirement, DEFAULT_RESERVE},
    constants::{DEFAULT_CONFIG_FILE_PATH, DEFAULT_QUERY_PATH},
};

/// Resolved settings for one run of the `diskspace` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub paths: Vec<PathBuf>,
    pub file: bool,
    pub usage: bool,
    pub requirement: Option<DiskRequirement>,
    pub reserve: u64,
}

/// Returns whether a flag is enabled, either through the arguments or the
/// config file.
macro_rules! is_flag_enabled {
    ($flag_name:ident, $args:expr, $config:expr) => {
        if $args.$flag_name {
            true
        } else if let Some(flags) = &$config.flags {
            flags.$flag_name.unwrap_or(false)
        } else {
            false
        }
    };
}

/// Returns the config path to use. If `config_location` is set, that path is
/// used, otherwise the default location under the user's config directory.
pub fn get_config_path(config_location: Option<&str>) -> Option<PathBuf> {
    if let Some(conf_loc) = config_location {
        Some(PathBuf::from(conf_loc))
    } else {
        dirs::config_dir().map(|mut path| {
            path.push(DEFAULT_CONFIG_FILE_PATH);
            path
        })
    }
}

/// Reads and parses the config file at `path`.
///
/// A missing file at the default location just means the defaults are used,
/// but a missing file the user asked for explicitly is an error.
pub fn read_config(path: Option<&Path>, explicit: bool) -> OptionResult<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    match fs::read_to_string(path) {
        Ok(config_string) => Ok(toml_edit::de::from_str(&config_string)?),
        Err(err) if !explicit && err.kind() == std::io::ErrorKind::NotFound => {
            Ok(Config::default())
        }
        Err(err) => Err(OptionError::config(format!(
            "unable to read '{}': {err}",
            path.display()
        ))),
    }
}

/// Merges the arguments with the config file.
pub fn get_query_options(args: &Args, config: &Config) -> OptionResult<QueryOptions> {
    let paths = get_paths(args, config);
    let file = is_flag_enabled!(file, args.general_args, config);
    let usage = is_flag_enabled!(usage, args.general_args, config);
    let requirement = get_requirement(args)?;
    let reserve = args
        .check_args
        .reserve
        .or_else(|| config.flags.as_ref().and_then(|flags| flags.reserve))
        .unwrap_or(DEFAULT_RESERVE);

    Ok(QueryOptions {
        paths,
        file,
        usage,
        requirement,
        reserve,
    })
}

/// Loads the config file the arguments point to and merges the two.
pub fn init_options(args: &Args) -> OptionResult<QueryOptions> {
    let config_location = args.general_args.config_location.as_deref();
    let config_path = get_config_path(config_location);
    let config = read_config(config_path.as_deref(), config_location.is_some())?;

    get_query_options(args, &config)
}

fn get_paths(args: &Args, config: &Config) -> Vec<PathBuf> {
    if !args.paths.is_empty() {
        args.paths.iter().map(PathBuf::from).collect()
    } else if let Some(paths) = config.flags.as_ref().and_then(|flags| flags.paths.as_ref()) {
        if paths.is_empty() {
            vec![PathBuf::from(DEFAULT_QUERY_PATH)]
        } else {
            paths.iter().map(PathBuf::from).collect()
        }
    } else {
        vec![PathBuf::from(DEFAULT_QUERY_PATH)]
    }
}

fn get_requirement(args: &Args) -> OptionResult<Option<DiskRequirement>> {
    let check_args = &args.check_args;

    match (check_args.content_size, check_args.diff_size) {
        (Some(size), None) => Ok(Some(DiskRequirement::Content { size })),
        (None, Some(size)) => Ok(Some(DiskRequirement::Diff {
            size,
            biggest_file_size: check_args.biggest_file.unwrap_or(0),
        })),
        (None, None) => Ok(None),
        (Some(_), Some(_)) => Err(OptionError::arg(
            "'--content_size' and '--diff_size' cannot be used together.",
        )),
    }
}
