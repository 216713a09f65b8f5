//! Real terminal output, the implementation users actually see.

use super::{Output, OutputConfig};
use crate::styles::{self, colors_enabled, colors_enabled_stderr};

/// Writes status to stdout and diagnostics to stderr, in git's style:
/// `warning: ...` and `error: ...` prefixes, lowercase, on stderr.
#[derive(Debug)]
pub struct CliOutput {
    config: OutputConfig,
}

impl CliOutput {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Neither quiet nor verbose.
    pub fn default_output() -> Self {
        Self::new(OutputConfig::default())
    }

    pub fn quiet() -> Self {
        Self::new(OutputConfig::new(true, false))
    }

    pub fn verbose() -> Self {
        Self::new(OutputConfig::new(false, true))
    }

    /// Status line to stdout, wrapped in `style` when colors are on.
    fn styled_line(&self, style: &str, msg: &str) {
        if colors_enabled() {
            println!("{style}{msg}{}", styles::RESET);
        } else {
            println!("{msg}");
        }
    }

    /// Diagnostic to stderr in git's lowercase `prefix: message` form.
    /// Never suppressed, quiet mode or not.
    fn diagnostic(&self, color: &str, prefix: &str, msg: &str) {
        if colors_enabled_stderr() {
            eprintln!("{color}{prefix}:{} {msg}", styles::RESET);
        } else {
            eprintln!("{prefix}: {msg}");
        }
    }
}

impl Output for CliOutput {
    fn info(&mut self, msg: &str) {
        if !self.config.quiet {
            println!("{msg}");
        }
    }

    fn success(&mut self, msg: &str) {
        if !self.config.quiet {
            self.styled_line(styles::GREEN, msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        self.diagnostic(styles::YELLOW, "warning", msg);
    }

    fn error(&mut self, msg: &str) {
        self.diagnostic(styles::RED, "error", msg);
    }

    fn debug(&mut self, msg: &str) {
        if self.config.verbose {
            self.styled_line(styles::DIM, &format!("debug: {msg}"));
        }
    }

    fn step(&mut self, msg: &str) {
        if self.config.verbose && !self.config.quiet {
            self.styled_line(styles::DIM, msg);
        }
    }

    fn list_item(&mut self, item: &str) {
        if !self.config.quiet {
            println!(" - {item}");
        }
    }

    fn is_quiet(&self) -> bool {
        self.config.quiet
    }

    fn is_verbose(&self) -> bool {
        self.config.verbose
    }
}
