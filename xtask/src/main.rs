use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

const BINARY: &str = "partermai";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for the partermai project")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build partermai in release mode and copy it to a bin directory
    Install {
        /// Custom installation path (default: ~/.cargo/bin or ~/.local/bin)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Remove a previously installed partermai binary
    Uninstall {
        /// Directory the binary was installed to
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Install { path } => install(path),
        Commands::Uninstall { path } => uninstall(path),
    }
}

fn install(custom_path: Option<PathBuf>) -> Result<()> {
    println!("Building {} (release)...", BINARY);
    let status = Command::new("cargo")
        .args(["build", "--release", "-p", "parterm-cli"])
        .status()
        .context("Failed to run cargo build")?;

    if !status.success() {
        bail!("Build failed");
    }

    let install_dir = determine_install_dir(custom_path)?;
    println!("Installing to: {}", install_dir.display());

    fs::create_dir_all(&install_dir)
        .with_context(|| format!("Failed to create directory: {}", install_dir.display()))?;

    let src = project_root()?
        .join("target/release")
        .join(binary_file_name());
    let dst = install_dir.join(binary_file_name());

    if !src.exists() {
        bail!("Binary not found: {}", src.display());
    }

    fs::copy(&src, &dst)
        .with_context(|| format!("Failed to copy {} to {}", src.display(), dst.display()))?;
    make_executable(&dst)?;
    println!("  Installed: {}", dst.display());

    if !dir_in_path(&install_dir) {
        println!();
        println!("Note: {} is not in your PATH.", install_dir.display());
    }

    println!();
    println!("Installation complete! Try `{} +version`.", BINARY);

    Ok(())
}

fn uninstall(custom_path: Option<PathBuf>) -> Result<()> {
    let target = determine_install_dir(custom_path)?.join(binary_file_name());
    if !target.exists() {
        println!("Nothing to remove at {}", target.display());
        return Ok(());
    }

    fs::remove_file(&target)
        .with_context(|| format!("Failed to remove {}", target.display()))?;
    println!("Removed: {}", target.display());

    Ok(())
}

fn binary_file_name() -> String {
    format!("{}{}", BINARY, std::env::consts::EXE_SUFFIX)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

fn dir_in_path(dir: &Path) -> bool {
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|p| p.as_path() == dir))
        .unwrap_or(false)
}

fn determine_install_dir(custom_path: Option<PathBuf>) -> Result<PathBuf> {
    // Priority: custom path > ~/.cargo/bin > ~/.local/bin
    if let Some(path) = custom_path {
        return Ok(path);
    }

    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let home = PathBuf::from(home);

    let cargo_bin = home.join(".cargo/bin");
    if cargo_bin.exists() {
        return Ok(cargo_bin);
    }

    let local_bin = home.join(".local/bin");
    if local_bin.exists() {
        return Ok(local_bin);
    }

    Ok(cargo_bin)
}

fn project_root() -> Result<PathBuf> {
    // CARGO_MANIFEST_DIR points at xtask/ when run through `cargo xtask`
    if let Some(dir) = std::env::var_os("CARGO_MANIFEST_DIR") {
        if let Some(parent) = PathBuf::from(dir).parent() {
            return Ok(parent.to_path_buf());
        }
    }

    let mut current = std::env::current_dir()?;
    loop {
        let cargo_toml = current.join("Cargo.toml");
        if cargo_toml.exists() && fs::read_to_string(&cargo_toml)?.contains("[workspace]") {
            return Ok(current);
        }
        if !current.pop() {
            bail!("Could not find workspace root");
        }
    }
}
