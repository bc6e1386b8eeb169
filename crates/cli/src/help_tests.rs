// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn test_commands_lists_every_group() {
    let text = strip_ansi(&commands());
    for cmd in [
        "project", "epic", "item", "board", "status", "init", "schema", "completion",
    ] {
        assert!(
            text.lines().any(|l| l.trim_start().starts_with(cmd)),
            "missing {cmd} in:\n{text}"
        );
    }
}

#[test]
fn test_commands_descriptions_align() {
    let text = strip_ansi(&commands());
    let columns: Vec<usize> = text
        .lines()
        .filter(|l| l.starts_with("  "))
        .filter_map(|l| {
            let cmd_end = l[2..].find(' ')? + 2;
            Some(cmd_end + l[cmd_end..].find(|c: char| c != ' ')?)
        })
        .collect();
    assert_eq!(columns.len(), 8);
    assert!(columns.iter().all(|&c| c == 14), "{columns:?}");
}

#[test]
fn test_template_has_placeholders() {
    let template = template();
    assert!(template.contains("{usage}"));
    assert!(template.contains("{options}"));
    assert!(strip_ansi(&template).contains("Options:"));
}

#[test]
fn test_quickstart_mentions_init() {
    assert!(strip_ansi(&quickstart()).contains("plank init"));
}
