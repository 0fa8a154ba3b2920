use clap::Parser;
use console::style;

use browserize::cli::{init_logging, run, Args};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    if let Err(err) = run(args) {
        eprintln!("{} {:#}", style("error:").red().bold(), err);
        std::process::exit(1);
    }
}
