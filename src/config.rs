/// Configuration constants for git-tidy
///
/// Centralizes the config keys, marker characters, and exit codes the
/// tidy workflow is built around.
/// Git config keys
pub mod keys {
    /// Repository-local key remembering the resolved default branch.
    pub const DEFAULT_BRANCH: &str = "tidy.defaultbranch";
}

/// Branch name heuristics
pub mod branches {
    /// Names commonly used for a repository's default branch.
    /// Auto-detection matches local branches against this list.
    pub const COMMON_DEFAULTS: &[&str] = &["main", "master", "devel", "dev"];
}

/// Markers git prefixes to entries in `git branch` output
pub mod markers {
    /// The currently checked-out branch, printed as `* name`.
    pub const CURRENT_BRANCH: &str = "* ";

    /// A branch checked out in a linked worktree, printed as `+ name`.
    /// The trailing space matters: a branch may itself be named `+name`,
    /// and git pads that entry as `  +name` instead.
    pub const LINKED_WORKTREE: &str = "+ ";
}

/// Process exit codes
pub mod exit_codes {
    /// Git's own exit code for running outside a repository, passed through.
    pub const NOT_A_REPOSITORY: i32 = 128;

    /// Exit code when no default branch can be resolved.
    pub const RESOLUTION_FAILURE: i32 = -1;

    /// Fallback exit code when process status cannot be determined.
    pub const DEFAULT_EXIT_CODE: i32 = -1;
}

/// Counter initialization values
pub mod counters {
    /// Initial value for the branch deletion counter.
    pub const INITIAL_BRANCHES_DELETED: u32 = 0;

    /// Increment value for successful operations.
    pub const OPERATION_INCREMENT: u32 = 1;
}
