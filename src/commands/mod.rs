/// Command modules for git-tidy
///
/// Each module owns one entry point: `tidy` is the housekeeping run
/// itself, `completions` generates shell completion scripts.
pub mod completions;
pub mod tidy;
