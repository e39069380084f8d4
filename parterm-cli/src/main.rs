//! Partermai - a multi-functional CLI with an editor and a passthrough shell

mod console;
mod dispatch;
mod editor;
pub mod error;
mod shell;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use console::{LineReader, Session};
use parterm_config::Config;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "partermai", version, about = "The multi-functional CLI")]
struct Cli {
    /// Load settings from a TOML file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print plain text without terminal colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Open the cli editor
    #[command(name = "+editor")]
    Editor,
    /// Start shell mode
    #[command(name = "+shell")]
    Shell,
    /// Show version
    #[command(name = "+version")]
    Version,
}

impl Commands {
    fn name(self) -> &'static str {
        match self {
            Commands::Editor => "+editor",
            Commands::Shell => "+shell",
            Commands::Version => "+version",
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(io::stderr)
        .init();
}

/// Colors stay on only when asked for and stdout is a terminal
fn use_color(config: &Config, stdout_is_terminal: bool) -> bool {
    config.ui.color && stdout_is_terminal
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load config from {}", path.display()),
        None => "Failed to load default config".to_string(),
    })?;
    if cli.no_color {
        config = config.without_color();
    }

    if cli.dump_config {
        print!("{}", parterm_config::writer::to_toml_string(&config)?);
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command()
            .error(ErrorKind::MissingSubcommand, "a mode is required")
            .exit();
    };

    if !use_color(&config, io::stdout().is_terminal()) {
        config = config.without_color();
    }

    let mut input = LineReader::new(io::stdin().lock());
    let mut output = io::stdout().lock();
    let mut session = Session::new(&config, &mut input, &mut output);
    dispatch::dispatch(command.name(), &mut session)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_every_subcommand_has_a_mode() {
        let cli = Cli::command();
        let names: Vec<_> = cli.get_subcommands().map(|c| c.get_name()).collect();
        assert_eq!(names.len(), dispatch::MODES.len());
        for name in names {
            assert!(dispatch::lookup(name).is_some(), "no mode for {}", name);
        }
    }

    #[test]
    fn test_parse_plus_subcommands() {
        let cli = Cli::try_parse_from(["partermai", "+shell"]).unwrap();
        assert_eq!(cli.command.map(Commands::name), Some("+shell"));

        let cli = Cli::try_parse_from(["partermai", "--no-color", "-vv", "+editor"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.command.map(Commands::name), Some("+editor"));
    }

    #[test]
    fn test_unknown_subcommand_is_usage_error() {
        let err = Cli::try_parse_from(["partermai", "+bogus"]).err().unwrap();
        assert!(err.use_stderr());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_color_needs_a_terminal() {
        let config = parterm_config::defaults::default_config();
        assert!(use_color(&config, true));
        assert!(!use_color(&config, false));
        assert!(!use_color(&config.without_color(), true));
    }

    #[test]
    fn test_mode_about_matches_help() {
        let cli = Cli::command();
        for mode in dispatch::MODES {
            let sub = cli.find_subcommand(mode.name).unwrap();
            assert_eq!(sub.get_about().map(|a| a.to_string()).as_deref(), Some(mode.about));
        }
    }
}
