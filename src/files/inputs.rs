use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use super::{resolve_imports, Options, INPUT_EXTENSION};
use crate::types::BrowserizeInput;

/// `path` with `extension` appended when it has none.
pub fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }

    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

fn read_source(path: &Path) -> Result<String> {
    let path = with_default_extension(path, INPUT_EXTENSION);
    debug!("Reading {}", path.display());
    fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Read every source and import value `options` names.
pub fn read_inputs(options: &Options) -> Result<BrowserizeInput> {
    let main = options.main.path().as_deref().map(read_source).transpose()?;
    let named = options.named.as_deref().map(read_source).transpose()?;
    let imports = resolve_imports(&options.imports)?;

    Ok(BrowserizeInput {
        main,
        named,
        imports,
    })
}
