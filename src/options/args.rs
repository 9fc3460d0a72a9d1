//! Argument parsing via clap.
//!
//! Note that you probably want to keep this as a single file so the build script doesn't
//! trip all over itself.

use std::ffi::OsString;

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "diskspace [OPTIONS] [PATH]...";

/// The arguments for diskspace.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[arg(
        value_name = "PATH",
        value_parser = value_parser!(OsString),
        help = "Paths to report free space for.",
        long_help = "Paths to report free space for. Each path is looked up on the filesystem it lives \
                    on. Defaults to the paths in the config file, or the current directory."
    )]
    pub paths: Vec<OsString>,

    #[command(flatten)]
    pub general_args: GeneralArgs,

    #[command(flatten)]
    pub check_args: CheckArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options", rename_all = "snake_case")]
pub struct GeneralArgs {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it isn't set, the default location is checked."
    )]
    pub config_location: Option<String>,

    #[arg(
        short = 'f',
        long,
        help = "Treats each path as the location of a file.",
        long_help = "Treats each path as the location of a file, which does not need to exist yet, and \
                    reports the free space of the directory that would contain it."
    )]
    pub file: bool,

    #[cfg(feature = "logging")]
    #[arg(
        long,
        value_name = "PATH",
        help = "Writes debug logs to a file.",
        long_help = "Writes debug logs to the given file. If not set, logs are written to stderr."
    )]
    pub log_file: Option<String>,

    #[arg(
        short = 'u',
        long,
        help = "Also shows the total and free bytes.",
        long_help = indoc! {
            "Shows the total size, the free bytes (including space reserved for root), and the
            available bytes for each path, separated by tabs:

                <total>    <free>    <available>    <path>"
        }
    )]
    pub usage: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Space Check Options", rename_all = "snake_case")]
pub struct CheckArgs {
    #[arg(
        long,
        value_name = "BYTES",
        help = "Requires room for a content package of this size.",
        long_help = "Checks that each path has room for a full content package of this size. This \
                    needs twice the package size plus the reserve, for the download and its \
                    unpacked content."
    )]
    pub content_size: Option<u64>,

    #[arg(
        long,
        value_name = "BYTES",
        conflicts_with = "content_size",
        help = "Requires room for a diff package of this size.",
        long_help = "Checks that each path has room for a diff package of this size. This needs twice \
                    the package size plus the size of the biggest patched file (see --biggest_file) \
                    plus the reserve."
    )]
    pub diff_size: Option<u64>,

    #[arg(
        long,
        value_name = "BYTES",
        requires = "diff_size",
        help = "The size of the biggest file a diff patches.",
        long_help = "The size of the biggest file a diff package patches. Requires --diff_size, and \
                    defaults to 0."
    )]
    pub biggest_file: Option<u64>,

    #[arg(
        long,
        value_name = "BYTES",
        help = "Extra free space required by a check.",
        long_help = "Extra free space required on top of the package itself when checking. Defaults \
                    to 20971520 (20 MiB)."
    )]
    pub reserve: Option<u64>,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Other Options", rename_all = "snake_case")]
pub struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use '--help'.")]
    help: Option<bool>,

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: Option<bool>,
}

/// Returns a [`Command`] for diskspace.
pub fn build_cmd() -> Command {
    Args::command()
}

/// Returns the parsed [`Args`] for the current process.
pub fn get_args() -> Args {
    Args::parse()
}
