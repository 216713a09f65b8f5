use super::{GitCommand, GitOutput};
use anyhow::Result;

impl GitCommand {
    /// Read a key from the repository-local config only.
    ///
    /// Returns the raw result so callers can tell an unset key (exit code 1)
    /// apart from not being in a repository at all (exit code 128).
    pub fn config_get_local(&self, key: &str) -> Result<GitOutput> {
        self.run(&["config", "--get", "--local", key])
    }

    /// Add a value for a key in the repository-local config.
    pub fn config_add(&self, key: &str, value: &str) -> Result<GitOutput> {
        self.run(&["config", "--add", key, value])
    }

    /// Get the remote a branch is configured to track.
    ///
    /// A missing key means the branch tracks nothing, which is not an error.
    pub fn tracking_remote(&self, branch: &str) -> Result<Option<String>> {
        let key = format!("branch.{branch}.remote");
        let output = self.run(&["config", "--get", &key])?;
        if output.success() {
            Ok(Some(output.text))
        } else {
            Ok(None)
        }
    }
}
