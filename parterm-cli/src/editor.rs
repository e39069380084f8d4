//! Line collector - gathers typed lines until end-of-input and saves them

use crate::console::{LineSource, Session};
use crate::error::{EditorError, Result};
use crossterm::style::Color;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// Read lines until end-of-stream, each followed by a single `\n`.
///
/// No line is special: text that looks like a command is stored as-is.
pub fn collect<S: LineSource + ?Sized>(source: &mut S) -> io::Result<String> {
    let mut buffer = String::new();
    while let Some(line) = source.next_line()? {
        buffer.push_str(&line);
        buffer.push('\n');
    }
    Ok(buffer)
}

/// Write `content` to `path`, replacing any existing file
pub fn save(path: &Path, content: &str) -> std::result::Result<(), EditorError> {
    std::fs::write(path, content).map_err(|source| EditorError::Save {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the line collector
pub fn run(session: &mut Session<'_>) -> Result<()> {
    session.say("Welcome to PartermEdit!", Color::Green)?;
    session.say(
        "Start typing your code. Press CTRL + D when finished.\n",
        Color::Yellow,
    )?;

    let buffer = collect(&mut *session.input)?;
    debug!(bytes = buffer.len(), "input finished");
    session.say("\nInput finished.", Color::Blue)?;

    let prompt = session.config.editor.save_prompt.clone();
    let answer = session.ask(&prompt, Color::Green)?;

    // A closed channel here is the same as an empty answer.
    let filename = answer.as_deref().map(str::trim).unwrap_or_default();
    if filename.is_empty() {
        session.say("No filename provided. Code not saved.", Color::Red)?;
        return Ok(());
    }

    match save(Path::new(filename), &buffer) {
        Ok(()) => {
            info!(path = filename, bytes = buffer.len(), "buffer saved");
            session.say(&format!("Code saved to {}", filename), Color::Green)?;
        }
        Err(e) => {
            warn!("Failed to save buffer: {}", e);
            session.say(&format!("Failed to save the file: {}", e), Color::Red)?;
        }
    }

    Ok(())
}
