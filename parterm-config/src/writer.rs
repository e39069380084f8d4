//! Configuration serialization

use crate::types::Config;
use crate::Result;
use std::path::Path;

/// Render a configuration as TOML
pub fn to_toml_string(config: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

/// Save configuration to a file
pub fn save_to_file(config: &Config, path: &Path) -> Result<()> {
    std::fs::write(path, to_toml_string(config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{defaults, parser};

    #[test]
    fn test_serialization() {
        let config = defaults::default_config();
        let toml_str = to_toml_string(&config).unwrap();
        assert!(toml_str.contains("[shell]"));
        assert!(toml_str.contains("save-prompt"));
        assert!(!toml_str.contains("program"));
        assert!(!toml_str.contains("flag"));
    }

    #[test]
    fn test_saved_file_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = defaults::default_config();
        config.shell.program = Some("/bin/zsh".to_string());

        save_to_file(&config, &path).unwrap();
        assert_eq!(parser::load_from_file(&path).unwrap(), config);
    }
}
