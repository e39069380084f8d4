//! TOML configuration parsing and validation

use crate::types::Config;
use crate::{ConfigError, Result};
use std::path::Path;

/// Parse config from TOML string
pub fn parse_toml(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(ConfigError::TomlParse)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load config from a TOML file
pub fn load_from_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Validate configuration for consistency
fn validate_config(config: &Config) -> Result<()> {
    if config.shell.prompt.is_empty() {
        return Err(ConfigError::ValidationError(
            "shell.prompt must not be empty".to_string(),
        ));
    }

    if config.editor.save_prompt.is_empty() {
        return Err(ConfigError::ValidationError(
            "editor.save-prompt must not be empty".to_string(),
        ));
    }

    if let Some(program) = &config.shell.program {
        if program.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "shell.program must name an interpreter".to_string(),
            ));
        }
    }

    if let Some(flag) = &config.shell.flag {
        if flag.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "shell.flag must not be empty".to_string(),
            ));
        }
    }

    Ok(())
}
