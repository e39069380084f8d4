//! Configuration loading

use crate::types::Config;
use crate::{defaults, parser, Result};
use std::path::Path;

/// Load configuration from `path`, or return defaults when no path is given.
///
/// Unlike a missing default location, an explicit path that cannot be read
/// or parsed is an error.
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => parser::load_from_file(path),
        None => Ok(defaults::default_config()),
    }
}

impl Config {
    /// Load from an optional explicit path
    pub fn load(path: Option<&Path>) -> Result<Self> {
        load(path)
    }

    /// Force colors off, e.g. for `--no-color`
    pub fn without_color(mut self) -> Self {
        self.ui.color = false;
        self
    }
}
