//! Output abstraction so command logic never prints directly.
//!
//! Resolution and cleanup code takes `&mut dyn Output` instead of calling
//! `println!` or `eprintln!`, which lets unit tests capture and assert on
//! everything the user would see:
//!
//! ```ignore
//! fn run_tidy(args: &Args, output: &mut dyn Output) -> Result<()> {
//!     output.info("Switching to main");
//!     output.success("Deleted 2 merged branches");
//!     Ok(())
//! }
//! ```

mod cli;

pub use cli::CliOutput;
pub use test::{OutputEntry, TestOutput};

/// Quiet and verbose flags shared by all output implementations.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub quiet: bool,
    pub verbose: bool,
}

impl OutputConfig {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }
}

/// Sink for user-facing messages.
///
/// Which channel a message lands on and whether flags suppress it is the
/// implementor's business, but the gating must match across implementations:
/// quiet silences `info`, `success`, and `list_item`; `warning` and `error`
/// always get through; `debug` and `step` need verbose.
pub trait Output {
    /// Status message. Suppressed by quiet.
    fn info(&mut self, msg: &str);

    /// Completion message. Suppressed by quiet.
    fn success(&mut self, msg: &str);

    /// Goes to stderr, quiet or not.
    fn warning(&mut self, msg: &str);

    /// Goes to stderr, quiet or not.
    fn error(&mut self, msg: &str);

    /// Verbose-only diagnostic.
    fn debug(&mut self, msg: &str);

    /// Verbose-only progress note for intermediate work.
    fn step(&mut self, msg: &str);

    /// One entry of an itemized listing. Suppressed by quiet.
    fn list_item(&mut self, item: &str);

    fn is_quiet(&self) -> bool;

    fn is_verbose(&self) -> bool;
}
