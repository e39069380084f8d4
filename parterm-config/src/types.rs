//! Configuration data structures

use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Presentation settings shared by every mode
    #[serde(default)]
    pub ui: UiConfig,

    /// Line collector settings
    #[serde(default)]
    pub editor: EditorConfig,

    /// Command passthrough settings
    #[serde(default)]
    pub shell: ShellConfig,
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Paint messages with terminal colors
    #[serde(default = "default_true")]
    pub color: bool,
}

/// Line collector settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EditorConfig {
    /// Prompt shown when asking where to save the buffer
    #[serde(default = "default_save_prompt")]
    pub save_prompt: String,
}

/// Command passthrough settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt printed before every command line
    #[serde(default = "default_shell_prompt")]
    pub prompt: String,

    /// Interpreter used to run command lines.
    /// `None` picks the platform shell (`sh -c` or `cmd /C`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Flag that makes `program` run its next argument as a command line.
    /// `None` picks the platform flag (`-c` or `/C`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

fn default_true() -> bool {
    true
}

pub(crate) fn default_save_prompt() -> String {
    "Enter filename to save: ".to_string()
}

pub(crate) fn default_shell_prompt() -> String {
    "[partermai ~]$ ".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            save_prompt: default_save_prompt(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_shell_prompt(),
            program: None,
            flag: None,
        }
    }
}
