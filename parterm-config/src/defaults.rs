//! Built-in configuration

use crate::types::{Config, EditorConfig, ShellConfig, UiConfig};

/// Default configuration used when no file is given
pub fn default_config() -> Config {
    Config {
        ui: UiConfig { color: true },
        editor: EditorConfig::default(),
        shell: ShellConfig::default(),
    }
}
