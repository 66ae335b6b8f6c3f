/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Progress color:
/// \>= 100% → green
/// \>= 50%  → yellow
/// otherwise → reset
pub fn color_for_progress(pct: f64) -> &'static str {
    if pct >= 100.0 {
        GREEN
    } else if pct >= 50.0 {
        YELLOW
    } else {
        RESET
    }
}
