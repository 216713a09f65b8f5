//! Default-branch resolution.
//!
//! Decides which branch a tidy run treats as the repository default: the
//! configured `tidy.defaultbranch` when present, otherwise auto-detection
//! against the common default names, falling back to an interactive choice
//! when several of them exist.

use std::fmt;
use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::config::{exit_codes, keys};
use crate::git::{parse_branch_names, GitCommand};
use crate::output::Output;

/// A resolution failure that must terminate the run with a specific
/// process exit code.
#[derive(Debug)]
pub enum ResolveError {
    /// Git itself reported we are not inside a repository.
    NotARepository { code: i32, message: String },
    /// `tidy.defaultbranch` names a branch that no longer exists.
    MissingConfiguredBranch { branch: String },
    /// No local branch matches any of the common default names.
    NoCandidates,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotARepository { message, .. } => write!(f, "{message}"),
            ResolveError::MissingConfiguredBranch { branch } => {
                write!(
                    f,
                    "{branch} is configured as the default branch for tidying, but it does not exist"
                )
            }
            ResolveError::NoCandidates => write!(f, "no candidate default branches found"),
        }
    }
}

impl std::error::Error for ResolveError {}

impl ResolveError {
    /// The exit code the process must terminate with for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ResolveError::NotARepository { code, .. } => *code,
            ResolveError::MissingConfiguredBranch { .. } | ResolveError::NoCandidates => {
                exit_codes::RESOLUTION_FAILURE
            }
        }
    }
}

/// Resolve the branch to tidy against.
///
/// Reads `tidy.defaultbranch` from the local config. When it is unset,
/// matches local branches against `known_defaults` and either adopts the
/// single match (persisting it unless `persist` is false) or asks the user
/// to pick one. An interactive pick is never persisted.
pub fn resolve_default_branch(
    git: &GitCommand,
    known_defaults: &[&str],
    persist: bool,
    input: &mut impl BufRead,
    output: &mut dyn Output,
) -> Result<String> {
    let configured = git.config_get_local(keys::DEFAULT_BRANCH)?;
    if configured.code == exit_codes::NOT_A_REPOSITORY {
        return Err(ResolveError::NotARepository {
            code: configured.code,
            message: configured.text,
        }
        .into());
    }

    // Needed either way: as a sanity check on the configured branch, or as
    // the candidate pool when nothing is configured.
    let branches = parse_branch_names(&git.branch_list()?.text);

    if configured.success() {
        let branch = configured.text;
        if branches.contains(&branch) {
            return Ok(branch);
        }
        output.warning(&format!(
            "{branch} is configured as the default branch for tidying, but it does not exist"
        ));
        return Err(ResolveError::MissingConfiguredBranch { branch }.into());
    }

    output.info("No default branch configured for tidying, trying to detect one...");

    let candidates: Vec<String> = branches
        .into_iter()
        .filter(|branch| known_defaults.contains(&branch.as_str()))
        .collect();

    match candidates.as_slice() {
        [only] => {
            if persist {
                git.config_add(keys::DEFAULT_BRANCH, only)?;
                output.info(&format!("Remembering {only} as the default branch"));
            } else {
                output.info(&format!("Would remember {only} as the default branch"));
            }
            Ok(only.clone())
        }
        [] => {
            output.error("no candidate default branches found");
            Err(ResolveError::NoCandidates.into())
        }
        _ => select_candidate(&candidates, input, output),
    }
}

/// Ask the user to pick one of several candidate branches.
///
/// Loops until a valid index arrives, re-prompting on out-of-range and
/// non-numeric input alike. The menu goes straight to stdout because it is
/// part of the prompt, not status output.
fn select_candidate(
    candidates: &[String],
    input: &mut impl BufRead,
    output: &mut dyn Output,
) -> Result<String> {
    loop {
        println!("Several potential default branches found. Please select one:");
        for (index, candidate) in candidates.iter().enumerate() {
            println!("{index}: {candidate}");
        }
        print!("Which to choose? ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("No selection made (end of input)");
        }

        match line.trim().parse::<usize>() {
            Ok(index) if index < candidates.len() => return Ok(candidates[index].clone()),
            Ok(_) => output.warning(&format!(
                "selection must be between 0 and {}",
                candidates.len() - 1
            )),
            Err(_) => output.warning("enter the number of one of the listed branches"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::branches::COMMON_DEFAULTS;
    use crate::output::TestOutput;
    use std::io::Cursor;
    use std::path::Path;

    #[test]
    fn test_outside_repository_maps_to_git_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let git = GitCommand::at(dir.path());
        let mut output = TestOutput::new();

        let err = resolve_default_branch(
            &git,
            COMMON_DEFAULTS,
            true,
            &mut io::empty(),
            &mut output,
        )
        .unwrap_err();

        let resolve_err = err.downcast_ref::<ResolveError>().expect("typed error");
        assert_eq!(resolve_err.exit_code(), 128);
        match resolve_err {
            ResolveError::NotARepository { code, message } => {
                assert_eq!(*code, 128);
                assert!(message.starts_with("fatal:"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_configured_branch_is_returned() {
        let dir = scratch_repo();
        let git = GitCommand::at(dir.path());
        git.config_add(keys::DEFAULT_BRANCH, "main").unwrap();
        let mut output = TestOutput::new();

        let branch = resolve_default_branch(
            &git,
            COMMON_DEFAULTS,
            true,
            &mut io::empty(),
            &mut output,
        )
        .unwrap();

        assert_eq!(branch, "main");
        assert!(!output.has_warnings());
    }

    #[test]
    fn test_missing_configured_branch_fails() {
        let dir = scratch_repo();
        let git = GitCommand::at(dir.path());
        git.config_add(keys::DEFAULT_BRANCH, "ghost").unwrap();
        let mut output = TestOutput::new();

        let err = resolve_default_branch(
            &git,
            COMMON_DEFAULTS,
            true,
            &mut io::empty(),
            &mut output,
        )
        .unwrap_err();

        let resolve_err = err.downcast_ref::<ResolveError>().expect("typed error");
        assert_eq!(resolve_err.exit_code(), exit_codes::RESOLUTION_FAILURE);
        assert!(matches!(
            resolve_err,
            ResolveError::MissingConfiguredBranch { branch } if branch == "ghost"
        ));
        assert!(output.has_warning("ghost"));
    }

    #[test]
    fn test_single_candidate_is_adopted_and_persisted() {
        let dir = scratch_repo();
        let git = GitCommand::at(dir.path());
        run_git(dir.path(), &["branch", "feature"]);
        let mut output = TestOutput::new();

        let branch = resolve_default_branch(
            &git,
            COMMON_DEFAULTS,
            true,
            &mut io::empty(),
            &mut output,
        )
        .unwrap();

        assert_eq!(branch, "main");
        let stored = git.config_get_local(keys::DEFAULT_BRANCH).unwrap();
        assert!(stored.success());
        assert_eq!(stored.text, "main");
        assert!(output.has_info("Remembering main"));
    }

    #[test]
    fn test_single_candidate_without_persist_skips_config_write() {
        let dir = scratch_repo();
        let git = GitCommand::at(dir.path());
        let mut output = TestOutput::new();

        let branch = resolve_default_branch(
            &git,
            COMMON_DEFAULTS,
            false,
            &mut io::empty(),
            &mut output,
        )
        .unwrap();

        assert_eq!(branch, "main");
        let stored = git.config_get_local(keys::DEFAULT_BRANCH).unwrap();
        assert!(!stored.success());
        assert!(output.has_info("Would remember main"));
    }

    #[test]
    fn test_no_candidates_fails() {
        let dir = tempfile::tempdir().unwrap();
        run_git(dir.path(), &["init", "--quiet", "--initial-branch=trunk"]);
        run_git(dir.path(), &["config", "user.email", "tidy@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Tidy Test"]);
        run_git(dir.path(), &["commit", "--allow-empty", "-m", "initial"]);
        let git = GitCommand::at(dir.path());
        let mut output = TestOutput::new();

        let err = resolve_default_branch(
            &git,
            COMMON_DEFAULTS,
            true,
            &mut io::empty(),
            &mut output,
        )
        .unwrap_err();

        let resolve_err = err.downcast_ref::<ResolveError>().expect("typed error");
        assert!(matches!(resolve_err, ResolveError::NoCandidates));
        assert_eq!(resolve_err.exit_code(), exit_codes::RESOLUTION_FAILURE);
        assert!(output.has_error("no candidate"));
    }

    #[test]
    fn test_two_candidates_prompt_and_selection_is_not_persisted() {
        let dir = scratch_repo();
        let git = GitCommand::at(dir.path());
        run_git(dir.path(), &["branch", "master"]);
        let mut output = TestOutput::new();

        // Branch list is alphabetical, so 0 = main, 1 = master.
        let mut input = Cursor::new(b"1\n".to_vec());
        let branch =
            resolve_default_branch(&git, COMMON_DEFAULTS, true, &mut input, &mut output).unwrap();

        assert_eq!(branch, "master");
        let stored = git.config_get_local(keys::DEFAULT_BRANCH).unwrap();
        assert!(!stored.success());
    }

    #[test]
    fn test_selection_reprompts_on_bad_input() {
        let dir = scratch_repo();
        let git = GitCommand::at(dir.path());
        run_git(dir.path(), &["branch", "master"]);
        let mut output = TestOutput::new();

        let mut input = Cursor::new(b"soon\n9\n0\n".to_vec());
        let branch =
            resolve_default_branch(&git, COMMON_DEFAULTS, true, &mut input, &mut output).unwrap();

        assert_eq!(branch, "main");
        assert_eq!(output.warnings().len(), 2);
    }

    #[test]
    fn test_selection_end_of_input_is_an_error() {
        let dir = scratch_repo();
        let git = GitCommand::at(dir.path());
        run_git(dir.path(), &["branch", "master"]);
        let mut output = TestOutput::new();

        let err = resolve_default_branch(
            &git,
            COMMON_DEFAULTS,
            true,
            &mut io::empty(),
            &mut output,
        )
        .unwrap_err();

        assert!(err.downcast_ref::<ResolveError>().is_none());
        assert!(err.to_string().contains("end of input"));
    }

    fn run_git(dir: &Path, args: &[&str]) {
        let status = std::process::Command::new("git")
            .args(args)
            .current_dir(dir)
            .env("GIT_CONFIG_GLOBAL", "/dev/null")
            .env("GIT_CONFIG_SYSTEM", "/dev/null")
            .status()
            .expect("git should run");
        assert!(status.success(), "git {args:?} failed");
    }

    fn scratch_repo() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        run_git(dir.path(), &["init", "--quiet", "--initial-branch=main"]);
        run_git(dir.path(), &["config", "user.email", "tidy@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Tidy Test"]);
        run_git(dir.path(), &["commit", "--allow-empty", "-m", "initial"]);
        dir
    }
}
