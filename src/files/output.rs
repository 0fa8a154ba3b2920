use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::{with_default_extension, MainInput, Options, DEFAULT_MAIN, OUTPUT_EXTENSION};

/// Where the module is written.
///
/// An explicit output gets `.mjs` when it has no extension. Otherwise the main
/// path (or the named path when main is disabled) with its extension replaced.
pub fn output_path(options: &Options) -> PathBuf {
    if let Some(output) = &options.output {
        return with_default_extension(output, OUTPUT_EXTENSION);
    }

    let source = match (&options.main, &options.named) {
        (MainInput::Disabled, Some(named)) => named.clone(),
        (main, _) => main.path().unwrap_or_else(|| PathBuf::from(DEFAULT_MAIN)),
    };

    source.with_extension(OUTPUT_EXTENSION)
}

/// Write `data` to `path`, creating parent directories.
///
/// The data goes to a sibling temporary file first and is renamed into place.
pub fn write_output(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = path.with_extension(format!("{OUTPUT_EXTENSION}.tmp"));
    fs::write(&temp_path, data)
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to move output into place: {}", path.display()))?;

    Ok(())
}
