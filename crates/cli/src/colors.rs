// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and board output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes used by help output.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders/context: medium grey
    pub const CONTEXT: u8 = 245;
}

const RESET: &str = "\x1b[0m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    fg256(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    fg256(codes::LITERAL, text)
}

/// Apply context color (placeholders, hints) to text.
pub fn context(text: &str) -> String {
    fg256(codes::CONTEXT, text)
}

/// Paints `text` in a `#RRGGBB` status color.
///
/// Returns the text unchanged if `hex` is not a six-digit hex color.
pub fn hex(text: &str, hex: &str) -> String {
    let Some(digits) = hex.strip_prefix('#').filter(|d| d.len() == 6 && d.is_ascii()) else {
        return text.to_string();
    };
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => format!("\x1b[38;2;{r};{g};{b}m{text}{RESET}"),
        _ => text.to_string(),
    }
}

/// Colorize an examples help block when colors are enabled.
///
/// Expects format like:
/// ```text
/// Examples:
///   plank item new "Fix login"     Create a task
///   plank item move PROJ-1 Done    Move an item
/// ```
pub fn examples(text: &str) -> String {
    if should_colorize() {
        colorize_examples(text)
    } else {
        text.to_string()
    }
}

/// Colorizes section headers and the command part of example lines.
pub fn colorize_examples(text: &str) -> String {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                format!("{indent}{}", header(trimmed))
            } else if let Some(end) = find_description_start(trimmed) {
                let (cmd, desc) = trimmed.split_at(end);
                format!("{indent}{}{desc}", colorize_command(cmd))
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colorize a command line: words as literals, quoted strings, `<placeholders>`
/// and flag values as context.
pub fn colorize_command(cmd: &str) -> String {
    let mut out = Vec::new();
    let mut rest = cmd;
    let mut after_flag = false;

    while !rest.is_empty() {
        let (token, tail) = next_token(rest);
        let is_value = token.starts_with('"') || token.starts_with('<');
        if is_value || after_flag {
            out.push(context(token));
            after_flag = false;
        } else {
            out.push(literal(token));
            after_flag = token.starts_with('-') && !token.contains('=');
        }
        rest = tail.trim_start_matches(' ');
    }

    out.join(" ")
}

/// Splits off the first token, keeping quoted strings and placeholders whole.
fn next_token(s: &str) -> (&str, &str) {
    let end = match s.as_bytes().first() {
        Some(b'"') => s[1..].find('"').map(|i| i + 2),
        Some(b'<') => s.find('>').map(|i| i + 1),
        _ => s.find(' '),
    }
    .unwrap_or(s.len());
    s.split_at(end)
}

/// Find where the description starts (2+ spaces after the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let mut search = 0;
    while let Some(offset) = line[search..].find("  ") {
        let start = search + offset;
        let gap_end = line[start..]
            .find(|c: char| c != ' ')
            .map(|i| start + i)?;
        if start > 0 {
            return Some(start);
        }
        search = gap_end;
    }
    None
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
