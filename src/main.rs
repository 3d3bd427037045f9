use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;

use art_file_finder::prelude::*;

fn main() -> ExitCode {
    human_panic::setup_panic!();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            colored::control::set_override(atty::is(atty::Stream::Stderr));
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn execute() -> Result<()> {
    let matches = get_matches();

    let log_file = get_log_file(&matches);
    init_logger(get_verbosity(&matches), &log_file)
        .with_context(|| format!("Failed to initialise logging to '{log_file}'"))?;

    let settings = get_settings(&matches)?;

    let stdout = io::stdout();
    let count = run(&settings, BufWriter::new(stdout.lock()))?;
    debug!("Done, {count} name(s) written");

    Ok(())
}
