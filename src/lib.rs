use anyhow::Result;
use which::which;

pub mod commands;
pub mod config;
pub mod git;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod styles;

/// Version string without build metadata, suitable for man pages.
pub const VERSION: &str = env!("GIT_TIDY_VERSION");

/// Version string shown by `--version`; dev builds carry branch and commit.
pub const VERSION_DISPLAY: &str = env!("GIT_TIDY_VERSION_DISPLAY");

pub fn check_dependencies() -> Result<()> {
    if which("git").is_err() {
        anyhow::bail!("git-tidy requires git to be installed and on PATH");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dependencies_finds_git() {
        // git is a hard requirement of the whole test suite anyway.
        check_dependencies().unwrap();
    }

    #[test]
    fn test_version_strings_nonempty() {
        assert!(!VERSION.is_empty());
        assert!(VERSION_DISPLAY.starts_with(VERSION));
    }
}
