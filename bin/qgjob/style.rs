//! Terminal styling for qgjob output

/// ANSI color codes
pub mod colors {
    pub const RESET: &str = "\x1b[0m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";
}

use colors::*;

pub fn icon_success() -> String {
    format!("{}✓{}", GREEN, RESET)
}

pub fn icon_error() -> String {
    format!("{}✗{}", RED, RESET)
}

/// Arrow colored by a server-reported job status
pub fn icon_status(status: &str) -> String {
    format!("{}→{}", status_color(status), RESET)
}

pub fn print_success(msg: &str) {
    println!("{} {}", icon_success(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}{}{}", icon_error(), RED, msg, RESET);
}

fn status_color(status: &str) -> &'static str {
    match status {
        "queued" | "queued_for_retry" => YELLOW,
        "running" => CYAN,
        "completed" | "passed" => GREEN,
        "failed" => RED,
        _ => WHITE,
    }
}
