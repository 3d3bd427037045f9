use clap::{Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description};

use crate::constants::{
    ASSETS_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, QUIET_HELP, SORT_HELP, VERBOSE_HELP,
};
use crate::errors::Result;
use crate::logging::LogLevel;
use crate::settings::Settings;

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `assets`: Directory to list
/// - `sort`: Sort the listed names
/// - `verbose`: Increase verbosity level
/// - `quiet`: Only log errors
/// - `log_file`: Additional log file
pub fn build_command() -> Command {
    // define arg for the directory to list
    let arg_assets = Arg::new("assets")
        .short('a')
        .long("assets")
        .value_name("PATH")
        .help(ASSETS_HELP);

    // define arg for sorting
    let arg_sort = Arg::new("sort")
        .short('s')
        .long("sort")
        .help(SORT_HELP)
        .action(ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count)
        .conflicts_with("quiet");

    let arg_quiet = Arg::new("quiet")
        .short('q')
        .long("quiet")
        .help(QUIET_HELP)
        .action(ArgAction::SetTrue);

    // define arg for log file
    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name("artfind")
        .arg(arg_assets)
        .arg(arg_sort)
        .arg(arg_verbose)
        .arg(arg_quiet)
        .arg(arg_log_file)
}

/// Parses the process arguments
///
/// Exits with clap's usage error code on invalid input.
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the command-line arguments
///
/// `--quiet` wins over the default; otherwise each `-v` raises the level.
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    if matches.get_flag("quiet") {
        LogLevel::Error
    } else {
        LogLevel::from_occurrences(matches.get_count("verbose"))
    }
}

pub fn get_log_file(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string())
}

/// Resolves the run settings from the command-line arguments
///
/// # Errors
/// Returns a `FileSystem` error if no `--assets` path was given and the
/// executable's own location cannot be resolved
pub fn get_settings(matches: &ArgMatches) -> Result<Settings> {
    let assets = matches.get_one::<String>("assets").map(String::as_str);
    Settings::resolve(assets, matches.get_flag("sort"))
}
