mod args;
mod run;

pub use args::{parse_import, Args};
pub use run::{init_logging, run};
