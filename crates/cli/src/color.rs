// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color helpers shared by [`crate::table`] and [`crate::output`].

use std::io::IsTerminal;

const HEADER: &str = "\x1b[38;5;74m";
const MUTED: &str = "\x1b[38;5;240m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Priority: `NO_COLOR=1` disables, `COLOR=1` forces, otherwise a TTY check.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

pub fn apply_header(text: &str) -> String {
    if should_colorize() {
        format!("{HEADER}{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn apply_muted(text: &str) -> String {
    if should_colorize() {
        format!("{MUTED}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Colorize job/engine status words: green for healthy-active states,
/// yellow for in-progress/idle states, plain otherwise.
pub fn apply_status(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    let code = match text.trim() {
        "done" | "active" => GREEN,
        "map" | "reduce" | "idle" => YELLOW,
        _ => return text.to_string(),
    };
    format!("{code}{text}{RESET}")
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
