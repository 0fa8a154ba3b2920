//! `browserize.toml` configuration.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given.
pub const CONFIG_FILE_NAME: &str = "browserize.toml";

/// Options read from a config file. Command-line values take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Module whose `module.exports =` becomes the default export
    pub main: Option<PathBuf>,
    /// Skip the default export entirely
    pub no_default: bool,
    /// Module whose `module.exports = { ... }` becomes the named exports
    pub named: Option<PathBuf>,
    /// Where to write the ES module
    pub output: Option<PathBuf>,
    /// Import specifier -> file holding the value to interpolate
    pub imports: IndexMap<String, PathBuf>,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid browserize configuration")
    }

    /// Load an explicitly requested config file. It must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("In config file: {}", path.display()))
    }

    /// Load `browserize.toml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            log::trace!("No {} in {}", CONFIG_FILE_NAME, dir.display());
            return Ok(Self::default());
        }

        log::debug!("Using config file {}", path.display());
        Self::load(&path)
    }
}
