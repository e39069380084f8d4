//! Command passthrough - forwards typed lines to the host command interpreter
//!
//! The loop has two states. It stays `Running` on every line except the
//! exact keyword `exit` (or end-of-input), which moves it to `Exited`.
//! Command failures are reported and never end the loop.
//!
//! Lines are handed to the interpreter unfiltered. That is only sound
//! because the person typing is the person whose account runs them.

use crate::console::Session;
use crate::error::{Result, ShellError};
use crossterm::style::Color;
use std::process::Command;
use tracing::{debug, warn};

const EXIT_KEYWORD: &str = "exit";

#[cfg(windows)]
const DEFAULT_PROGRAM: &str = "cmd";
#[cfg(windows)]
const COMMAND_FLAG: &str = "/C";

#[cfg(not(windows))]
const DEFAULT_PROGRAM: &str = "sh";
#[cfg(not(windows))]
const COMMAND_FLAG: &str = "-c";

/// What a typed line asks the loop to do
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    Exit,
    Empty,
    Command(&'a str),
}

/// Classify a raw line. Matching is on the trimmed text and is case-sensitive.
pub fn classify(line: &str) -> Input<'_> {
    let line = line.trim();
    if line == EXIT_KEYWORD {
        Input::Exit
    } else if line.is_empty() {
        Input::Empty
    } else {
        Input::Command(line)
    }
}

/// Runs one command line to completion and returns its stdout
pub trait CommandRunner {
    fn execute(&mut self, command: &str) -> std::result::Result<String, ShellError>;
}

impl<F> CommandRunner for F
where
    F: FnMut(&str) -> std::result::Result<String, ShellError>,
{
    fn execute(&mut self, command: &str) -> std::result::Result<String, ShellError> {
        self(command)
    }
}

/// [`CommandRunner`] backed by the platform shell, or a configured one.
///
/// Runs `program flag <line>`. Either part falls back to the platform
/// default on its own, so a configured interpreter that does not take
/// `-c` or `/C` needs its flag configured too.
#[derive(Debug, Clone)]
pub struct SystemShell {
    program: String,
    flag: String,
}

impl SystemShell {
    pub fn new(program: Option<&str>, flag: Option<&str>) -> Self {
        Self {
            program: program.unwrap_or(DEFAULT_PROGRAM).to_string(),
            flag: flag.unwrap_or(COMMAND_FLAG).to_string(),
        }
    }
}

impl CommandRunner for SystemShell {
    fn execute(&mut self, command: &str) -> std::result::Result<String, ShellError> {
        // `output()` gives the child a closed stdin, so it cannot steal
        // lines meant for the prompt.
        let output = Command::new(&self.program)
            .arg(&self.flag)
            .arg(command)
            .output()
            .map_err(|source| ShellError::Spawn {
                command: command.to_string(),
                source,
            })?;

        debug!(command, status = %output.status, "command finished");

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(ShellError::Failed {
                command: command.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

/// Run the passthrough shell with the configured interpreter
pub fn run(session: &mut Session<'_>) -> Result<()> {
    let shell = &session.config.shell;
    let mut runner = SystemShell::new(shell.program.as_deref(), shell.flag.as_deref());
    run_with(session, &mut runner)
}

/// Run the passthrough loop against any runner
pub fn run_with(session: &mut Session<'_>, runner: &mut dyn CommandRunner) -> Result<()> {
    session.say(
        &format!("Welcome to PartermShell! Type \"{}\" to quit.\n", EXIT_KEYWORD),
        Color::Green,
    )?;

    let prompt = session.config.shell.prompt.clone();
    loop {
        let Some(line) = session.ask(&prompt, Color::Blue)? else {
            // Ctrl+D leaves the cursor after the prompt
            writeln!(session.output)?;
            debug!("end of input, leaving shell");
            break;
        };

        match classify(&line) {
            Input::Exit => break,
            Input::Empty => continue,
            Input::Command(command) => match runner.execute(command) {
                Ok(stdout) => print_output(session, &stdout)?,
                Err(e) => {
                    warn!("{}", e);
                    session.say(&format!("Error executing command: {}", e), Color::Red)?;
                }
            },
        }
    }

    session.say("Exiting Partermai Shell...", Color::Red)?;
    Ok(())
}

/// Print captured output with exactly one trailing newline; print nothing
/// for empty output.
fn print_output(session: &mut Session<'_>, stdout: &str) -> std::io::Result<()> {
    let body = stdout.trim_end_matches(['\r', '\n']);
    if body.is_empty() {
        return Ok(());
    }
    session.say(body, Color::Green)
}
