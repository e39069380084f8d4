//! Error types for partermai

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors from persisting the line collector's buffer
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("cannot write {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from running a single passthrough command
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with {status}{}", stderr_suffix(.stderr))]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    let stderr = stderr.trim_end();
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}

/// Top-level CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error("console error")]
    Io(#[from] std::io::Error),

    #[error("unknown mode: {0}")]
    UnknownMode(String),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
