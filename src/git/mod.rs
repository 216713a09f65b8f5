use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::Command;

use crate::config::exit_codes::DEFAULT_EXIT_CODE;
use crate::log_debug;

mod branch;
mod config;
mod remote;

pub use branch::{parse_branch_names, partition_merged, MergedBranches};

/// Captured result of a single git invocation.
///
/// `text` holds trimmed stdout when git succeeded and trimmed stderr when it
/// did not, so callers branching on `code` always see the relevant stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOutput {
    pub code: i32,
    pub text: String,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Runs git subcommands, capturing their exit code and output.
pub struct GitCommand {
    current_dir: Option<PathBuf>,
}

impl GitCommand {
    /// Run git in the process working directory.
    pub fn new() -> Self {
        Self { current_dir: None }
    }

    /// Run git against an explicit repository directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: Some(dir.into()),
        }
    }

    /// Invoke `git` with the given arguments and wait for it to finish.
    ///
    /// A non-zero git exit is not an error here; it comes back as a normal
    /// `GitOutput` for the caller to inspect. The only `Err` this returns is
    /// a failure to run git at all.
    pub fn run(&self, args: &[&str]) -> Result<GitOutput> {
        log_debug!("git {}", args.join(" "));

        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

        let code = output.status.code().unwrap_or(DEFAULT_EXIT_CODE);
        let text = if output.status.success() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            String::from_utf8_lossy(&output.stderr).trim().to_string()
        };

        Ok(GitOutput { code, text })
    }
}

impl Default for GitCommand {
    fn default() -> Self {
        Self::new()
    }
}
