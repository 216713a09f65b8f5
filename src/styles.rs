//! Terminal text styling utilities.
//!
//! Provides clean abstractions for ANSI terminal styling, keeping escape codes
//! isolated from application code.

/// ANSI escape code for bold text.
pub const BOLD: &str = "\x1b[1m";

/// ANSI escape code for dim text.
pub const DIM: &str = "\x1b[2m";

/// ANSI escape code for red text.
pub const RED: &str = "\x1b[31m";

/// ANSI escape code for green text.
pub const GREEN: &str = "\x1b[32m";

/// ANSI escape code for yellow text.
pub const YELLOW: &str = "\x1b[33m";

/// ANSI escape code to reset all styling.
pub const RESET: &str = "\x1b[0m";

/// Whether colored output should be written to stdout.
pub fn colors_enabled() -> bool {
    console::colors_enabled()
}

/// Whether colored output should be written to stderr.
pub fn colors_enabled_stderr() -> bool {
    console::colors_enabled_stderr()
}
