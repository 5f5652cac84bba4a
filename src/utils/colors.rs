/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const CYAN: &str = "\x1b[36m";

/// Label in cyan.
pub fn label(name: &str) -> String {
    format!("{CYAN}{name}{RESET}")
}
