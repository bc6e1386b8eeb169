// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    let rows: [(&str, &str); 6] = [
        ("project", "Create, list and archive projects"),
        ("epic", "Create, show and archive epics"),
        ("item", "Create, edit, move and archive work items"),
        ("board", "Create and view boards, rank cards"),
        ("status", "Manage statuses and allowed transitions"),
        ("init", "Initialize a planning database"),
    ];
    let setup: [(&str, &str); 2] = [
        ("schema", "Output JSON Schema for JSON output"),
        ("completion", "Generate shell completions"),
    ];

    let section = |title: &str, rows: &[(&str, &str)]| {
        let mut lines = vec![colors::header(title)];
        lines.extend(
            rows.iter()
                .map(|(cmd, about)| format!("  {}{}{about}", colors::literal(cmd), pad(cmd))),
        );
        lines.join("\n")
    };

    format!(
        "{}\n\n{}\n",
        section("Planning:", &rows),
        section("Setup:", &setup)
    )
}

fn pad(cmd: &str) -> String {
    " ".repeat(12usize.saturating_sub(cmd.len()))
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  plank init --project PROJ \"Project\"     Initialize with a first project
  plank item new \"Write docs\"             Create a task
  plank item move PROJ-1 \"In Progress\"    Start working on it
  plank board new Main                    Create a board
  plank board show                        Show the board",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
