use super::{GitCommand, GitOutput};
use anyhow::Result;

impl GitCommand {
    /// Fetch every remote, pruning stale remote-tracking refs.
    pub fn fetch_all_prune(&self) -> Result<GitOutput> {
        self.run(&["fetch", "--all", "--prune"])
    }

    /// Fast-forward-only merge of `<remote>/<branch>` and `<branch>`.
    pub fn merge_ff_only(&self, remote: &str, branch: &str) -> Result<GitOutput> {
        let source = format!("{remote}/{branch}");
        self.run(&["merge", "--ff-only", &source, branch])
    }
}
