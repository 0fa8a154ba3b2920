use clap::{ArgAction, Parser};
use log::warn;
use std::collections::VecDeque;
use std::path::PathBuf;

use crate::config::Config;
use crate::files::{MainInput, Options};

#[derive(Parser, Debug)]
#[command(name = "browserize")]
#[command(
    version,
    about = "Turn CommonJS default and named export modules into a single ES module"
)]
#[command(
    long_about = "Rewrites `module.exports = ...` as `export default ...` and \
`module.exports = { ... }` as `export { ... }`, combining both modules into one \
`.mjs` file when both are given.\n\n\
Paths may be given positionally in the order MAIN NAMED OUTPUT; flags take \
precedence over positionals, and positionals over browserize.toml."
)]
pub struct Args {
    /// Positional paths: main module, named exports module, output file
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Module whose `module.exports =` becomes the default export [default: index.js]
    #[arg(short = 'd', long = "default", visible_alias = "main", alias = "d")]
    pub main: Option<PathBuf>,

    /// Module whose `module.exports = { ... }` becomes the named exports
    #[arg(short = 'n', long, alias = "n")]
    pub named: Option<PathBuf>,

    /// Output file [default: main (or named) path with a .mjs extension]
    #[arg(short = 'o', long, alias = "o")]
    pub output: Option<PathBuf>,

    /// Write no default export
    #[arg(short = 'x', long = "no-default")]
    pub no_default: bool,

    /// Replace `require(SPECIFIER)` with the value exported by FILE
    #[arg(
        short = 'i',
        long = "import",
        value_name = "SPECIFIER=FILE",
        value_parser = parse_import
    )]
    pub imports: Vec<(String, PathBuf)>,

    /// Config file [default: ./browserize.toml if present]
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// More log output (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Parse `SPECIFIER=FILE`. The split is on the last `=`.
pub fn parse_import(s: &str) -> Result<(String, PathBuf), String> {
    match s.rsplit_once('=') {
        Some((specifier, file)) if !specifier.is_empty() && !file.is_empty() => {
            Ok((specifier.to_string(), PathBuf::from(file)))
        }
        _ => Err(format!("expected SPECIFIER=FILE, got `{s}`")),
    }
}

impl Args {
    /// Resolve flags, positionals and config into run options.
    ///
    /// Each slot takes its flag first, then the next positional (in the order
    /// main, named, output), then the config value. A disabled default export
    /// consumes no positional.
    pub fn into_options(self, config: Config) -> Options {
        let mut positionals: VecDeque<PathBuf> = self.paths.into();

        let main = if self.no_default || (self.main.is_none() && config.no_default) {
            MainInput::Disabled
        } else {
            match self.main.or_else(|| positionals.pop_front()).or(config.main) {
                Some(path) => MainInput::Path(path),
                None => MainInput::Default,
            }
        };

        let named = self
            .named
            .or_else(|| positionals.pop_front())
            .or(config.named);
        let output = self
            .output
            .or_else(|| positionals.pop_front())
            .or(config.output);

        if !positionals.is_empty() {
            warn!(
                "Ignoring {} extra positional argument(s): {:?}",
                positionals.len(),
                positionals
            );
        }

        let mut imports = config.imports;
        imports.extend(self.imports);

        Options {
            main,
            named,
            output,
            imports,
        }
    }
}
