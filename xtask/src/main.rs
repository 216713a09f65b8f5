//! xtask - Development automation tasks for git-tidy
//!
//! Build-adjacent chores (currently just man page generation) that should
//! not ship inside the git-tidy binary itself.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

const COMMAND_NAME: &str = "git-tidy";

/// The clap Command the man page is rendered from.
///
/// `--version` output carries dev-build metadata, which has no place in a
/// man page, so the plain release version is substituted here.
fn tidy_command() -> clap::Command {
    git_tidy::commands::tidy::Args::command().version(git_tidy::VERSION)
}

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development automation tasks for git-tidy")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the git-tidy man page
    GenMan {
        /// Output directory for man pages
        #[arg(long, default_value = "man")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GenMan { output_dir } => generate_man_page(&output_dir),
    }
}

/// Render the man page into `output_dir` as git-tidy.1.
fn generate_man_page(output_dir: &PathBuf) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create man directory: {}", output_dir.display()))?;

    let man = Man::new(tidy_command());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let file_path = output_dir.join(format!("{COMMAND_NAME}.1"));
    fs::write(&file_path, &buffer)
        .with_context(|| format!("Failed to write man page: {}", file_path.display()))?;

    eprintln!("Generated: {}", file_path.display());
    Ok(())
}
