use super::{GitCommand, GitOutput};
use crate::config::markers;
use anyhow::Result;

impl GitCommand {
    /// List local branches, raw (`git branch --list`).
    pub fn branch_list(&self) -> Result<GitOutput> {
        self.run(&["branch", "--list"])
    }

    /// List branches already merged into the current branch, raw.
    pub fn merged_branches(&self) -> Result<GitOutput> {
        self.run(&["branch", "--merged"])
    }

    /// Check out a branch in the working directory.
    pub fn checkout(&self, branch: &str) -> Result<GitOutput> {
        self.run(&["checkout", branch])
    }

    /// Delete a fully merged branch (`git branch -d`).
    ///
    /// This is the one call in a tidy run whose result is asserted, so a
    /// refused delete becomes an error instead of a `GitOutput`.
    pub fn branch_delete(&self, branch: &str) -> Result<()> {
        let output = self.run(&["branch", "-d", branch])?;
        if !output.success() {
            anyhow::bail!("Git branch delete failed: {}", output.text);
        }
        Ok(())
    }
}

/// Parse `git branch` output into bare branch names.
///
/// Splits on newlines, drops empty lines, and strips the current-branch and
/// linked-worktree markers. A marker is the sigil plus its following space;
/// a branch legally named `+held` comes out intact.
pub fn parse_branch_names(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| {
            let name = line.trim();
            name.strip_prefix(markers::CURRENT_BRANCH)
                .or_else(|| name.strip_prefix(markers::LINKED_WORKTREE))
                .unwrap_or(name)
        })
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Branches from `git branch --merged` output, split by what can be deleted.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MergedBranches {
    /// Merged branches safe to delete.
    pub deletable: Vec<String>,
    /// Merged branches checked out in linked worktrees. git refuses to
    /// delete these while the worktree exists.
    pub in_worktrees: Vec<String>,
}

/// Split merged-branch output into deletable and worktree-held names.
/// The currently checked-out branch (starred entry) appears in neither.
/// Only the `+ ` marker form means a linked worktree; an unpadded leading
/// `+` is part of the branch name.
pub fn partition_merged(output: &str) -> MergedBranches {
    let mut merged = MergedBranches::default();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(markers::CURRENT_BRANCH) {
            continue;
        }
        if let Some(name) = line.strip_prefix(markers::LINKED_WORKTREE) {
            merged.in_worktrees.push(name.to_string());
        } else {
            merged.deletable.push(line.to_string());
        }
    }

    merged
}
