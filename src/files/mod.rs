//! File-system layer around the transform: locate and read the inputs,
//! resolve import values, and write the resulting module.

mod imports;
mod inputs;
mod output;

pub use imports::{resolve_import_value, resolve_imports};
pub use inputs::{read_inputs, with_default_extension};
pub use output::{output_path, write_output};

use anyhow::Result;
use indexmap::IndexMap;
use log::info;
use std::path::PathBuf;

use crate::engine::browserize;

/// Input path used when no main module is given
pub const DEFAULT_MAIN: &str = "index";
/// Extension added to input paths that have none
pub const INPUT_EXTENSION: &str = "js";
/// Extension of the written module
pub const OUTPUT_EXTENSION: &str = "mjs";

/// Which main module to read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MainInput {
    /// `index.js`
    #[default]
    Default,
    Path(PathBuf),
    /// No default export
    Disabled,
}

impl MainInput {
    /// Path to read, if any, before extension defaulting
    pub fn path(&self) -> Option<PathBuf> {
        match self {
            MainInput::Default => Some(PathBuf::from(DEFAULT_MAIN)),
            MainInput::Path(path) => Some(path.clone()),
            MainInput::Disabled => None,
        }
    }
}

/// Fully resolved options for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub main: MainInput,
    pub named: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Import specifier -> file holding the value
    pub imports: IndexMap<String, PathBuf>,
}

/// Read the inputs, transform them, and write the module. Returns the written path.
///
/// Nothing is written when reading or transforming fails.
pub fn run(options: &Options) -> Result<PathBuf> {
    let input = read_inputs(options)?;
    let data = browserize(&input)?;

    let path = output_path(options);
    write_output(&path, &data)?;
    info!("Wrote {} bytes to {}", data.len(), path.display());

    Ok(path)
}
