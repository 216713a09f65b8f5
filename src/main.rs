/// git-tidy - merged-branch housekeeping for Git
///
/// Installed as `git-tidy` so Git picks it up as `git tidy`. The binary
/// has a single job plus a completions helper, so routing stays textual.
use anyhow::Result;

use git_tidy::commands;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "completions" {
        commands::completions::run()
    } else {
        commands::tidy::run()
    }
}
