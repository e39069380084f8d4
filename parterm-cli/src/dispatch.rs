//! Mode table - maps subcommand names to the function that runs them
//!
//! The table stores function pointers. A mode only runs after its name has
//! been resolved, and exactly one mode runs per process.

use crate::console::Session;
use crate::error::{CliError, Result};
use crate::{editor, shell};
use crossterm::style::Color;
use tracing::info;

pub type ModeFn = fn(&mut Session<'_>) -> Result<()>;

/// A selectable mode
pub struct Mode {
    pub name: &'static str,
    pub about: &'static str,
    pub run: ModeFn,
}

pub const MODES: &[Mode] = &[
    Mode {
        name: "+editor",
        about: "Open the cli editor",
        run: editor::run,
    },
    Mode {
        name: "+shell",
        about: "Start shell mode",
        run: shell::run,
    },
    Mode {
        name: "+version",
        about: "Show version",
        run: version,
    },
];

/// Find a mode by its subcommand name
pub fn lookup(name: &str) -> Option<&'static Mode> {
    MODES.iter().find(|mode| mode.name == name)
}

/// Resolve `name`, then run that mode once
pub fn dispatch(name: &str, session: &mut Session<'_>) -> Result<()> {
    let mode = lookup(name).ok_or_else(|| CliError::UnknownMode(name.to_string()))?;
    info!(mode = mode.name, about = mode.about, "starting mode");
    (mode.run)(session)
}

/// Print the version banner
pub fn version(session: &mut Session<'_>) -> Result<()> {
    let banner = format!("Partermai v{} ⚡", env!("CARGO_PKG_VERSION"));
    writeln!(
        session.output,
        "{}",
        session.palette.paint_bold(&banner, Color::Green)
    )?;
    Ok(())
}
