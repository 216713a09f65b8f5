use std::io;

use anyhow::Result;
use clap::Parser;

use crate::config::branches::COMMON_DEFAULTS;
use crate::config::counters::{INITIAL_BRANCHES_DELETED, OPERATION_INCREMENT};
use crate::git::{partition_merged, GitCommand};
use crate::logging::init_logging;
use crate::output::{CliOutput, Output, OutputConfig};
use crate::resolver::{resolve_default_branch, ResolveError};

#[derive(Parser)]
#[command(name = "git-tidy")]
#[command(version = crate::VERSION_DISPLAY)]
#[command(about = "Switches to the default branch, syncs it, and deletes merged branches")]
#[command(long_about = r#"
Resolves the repository's default branch (remembering it in the local
tidy.defaultbranch config key on first use), checks it out, fast-forwards
it from its configured remote, and deletes every local branch already
merged into it.
"#)]
pub struct Args {
    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(short, long, help = "Only print warnings, errors, and prompts")]
    quiet: bool,

    #[arg(
        short = 'n',
        long,
        help = "Report what would be done without changing the repository"
    )]
    dry_run: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    // Initialize logging based on verbosity flag
    init_logging(args.verbose);

    crate::check_dependencies()?;

    let config = OutputConfig::new(args.quiet, args.verbose);
    let mut output = CliOutput::new(config);

    // Resolution failures carry their own mandated exit codes, including
    // git's 128 for running outside a repository. Everything else takes
    // the normal error path.
    if let Err(error) = run_tidy(&args, &mut output) {
        if let Some(resolve_error) = error.downcast_ref::<ResolveError>() {
            if let ResolveError::NotARepository { message, .. } = resolve_error {
                eprintln!("{message}");
            }
            std::process::exit(resolve_error.exit_code());
        }
        return Err(error);
    }

    Ok(())
}

fn run_tidy(args: &Args, output: &mut dyn Output) -> Result<()> {
    let git = GitCommand::new();

    let mut stdin = io::stdin().lock();
    let default_branch = resolve_default_branch(
        &git,
        COMMON_DEFAULTS,
        !args.dry_run,
        &mut stdin,
        output,
    )?;
    drop(stdin);

    output.debug(&format!("Resolved default branch: {default_branch}"));

    if args.dry_run {
        output.info(&format!("Would switch to {default_branch}"));
    } else {
        output.info(&format!("Switching to {default_branch}"));
        let checkout = git.checkout(&default_branch)?;
        if !checkout.success() {
            output.warning(&format!(
                "could not switch to {default_branch}: {}",
                checkout.text
            ));
        }
    }

    let remote = git.tracking_remote(&default_branch)?;
    match &remote {
        Some(remote) => output.info(&format!("{default_branch} is configured for remote {remote}")),
        None => output.warning(&format!(
            "{default_branch} has no configured remote, skipping the fast-forward"
        )),
    }

    if !args.dry_run {
        output.step("Fetching all remotes and pruning stale remote-tracking refs");
        let fetch = git.fetch_all_prune()?;
        if !fetch.success() {
            output.warning(&format!("fetch failed: {}", fetch.text));
        }

        if let Some(remote) = &remote {
            let merge = git.merge_ff_only(remote, &default_branch)?;
            if !merge.success() {
                output.warning(&format!(
                    "could not fast-forward {default_branch} from {remote}: {}",
                    merge.text
                ));
            }
        }
    }

    output.step(&format!("Looking for branches merged into {default_branch}"));
    let merged_output = git.merged_branches()?;
    if !merged_output.success() {
        output.warning(&format!(
            "could not list merged branches: {}",
            merged_output.text
        ));
        return Ok(());
    }

    let merged = partition_merged(&merged_output.text);

    for branch in &merged.in_worktrees {
        output.warning(&format!(
            "{branch} is merged but checked out in a linked worktree, leaving it alone"
        ));
    }

    if merged.deletable.is_empty() {
        output.info("No merged branches to delete");
        return Ok(());
    }

    if args.dry_run {
        output.info("Branches that would be deleted:");
        for branch in &merged.deletable {
            output.list_item(branch);
        }
        return Ok(());
    }

    let mut branches_deleted = INITIAL_BRANCHES_DELETED;
    for branch in &merged.deletable {
        output.info(&format!("Deleting {branch}"));
        git.branch_delete(branch)?;
        branches_deleted += OPERATION_INCREMENT;
    }

    let noun = if branches_deleted == 1 {
        "branch"
    } else {
        "branches"
    };
    output.success(&format!("Deleted {branches_deleted} merged {noun}"));

    Ok(())
}
