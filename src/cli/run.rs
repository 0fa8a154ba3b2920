use anyhow::{Context, Result};
use console::style;
use log::LevelFilter;
use std::env;
use std::path::PathBuf;

use super::Args;
use crate::config::Config;
use crate::files;

/// Set up `env_logger` for the given flags. `RUST_LOG` still wins when set.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Run the command line: resolve options, transform, write.
pub fn run(args: Args) -> Result<PathBuf> {
    let quiet = args.quiet;

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => {
            let cwd = env::current_dir().context("Failed to determine the working directory")?;
            Config::discover(&cwd)?
        }
    };

    let options = args.into_options(config);
    log::debug!("Resolved options: {:?}", options);

    let written = files::run(&options)?;

    if !quiet {
        eprintln!(
            "{} {}",
            style("Wrote").green().bold(),
            style(written.display()).cyan()
        );
    }

    Ok(written)
}
