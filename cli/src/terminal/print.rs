use colored::*;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

/// Events on this target are printed verbatim by the formatter.
pub const PRINT_TARGET: &str = "addrcheck::print";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    );
    print(&line);
}

pub fn fat_separator() {
    print(&"═".repeat(TOTAL_WIDTH).bright_black().to_string());
}

/// Renders a verdict as `valid` or `invalid`.
pub fn verdict(valid: bool) -> &'static str {
    if valid { "valid" } else { "invalid" }
}

pub fn colored_verdict(valid: bool) -> ColoredString {
    if valid {
        verdict(valid).green()
    } else {
        verdict(valid).red()
    }
}

/// Renders an input the way the battery reports it, `NULL` when absent.
pub fn input(text: Option<&str>) -> String {
    match text {
        Some(text) => format!("\"{text}\""),
        None => String::from("NULL"),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
