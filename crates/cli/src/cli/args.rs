// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs and value parsers for CLI commands.

use chrono::NaiveDate;
use clap::Args;
use pk_core::WorkItemType;

use super::OutputFormat;

/// Output format selection shared by commands with structured output.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format (text, json)
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Optional version guard for optimistic updates.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct VersionArgs {
    /// Fail with a conflict unless the item is still at this version
    #[arg(long = "expect-version", value_name = "N")]
    pub expected_version: Option<i64>,
}

/// Parse a string that must not be empty or whitespace-only.
pub(crate) fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse a work item type (story, bug, task, subtask).
pub(crate) fn work_item_type(s: &str) -> Result<WorkItemType, String> {
    s.parse().map_err(|e: pk_core::Error| e.to_string())
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub(crate) fn date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{s}': expected YYYY-MM-DD"))
}

/// A WIP limit assignment `STATUS=N`, where `N` may be `none`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WipAssignment {
    pub status: String,
    pub limit: Option<u32>,
}

pub(crate) fn wip_assignment(s: &str) -> Result<WipAssignment, String> {
    let (status, limit) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected STATUS=LIMIT, got '{s}'"))?;
    let status = status.trim();
    if status.is_empty() {
        return Err("status cannot be empty".to_string());
    }
    let limit = match limit.trim() {
        "none" | "" => None,
        n => Some(
            n.parse::<u32>()
                .map_err(|_| format!("invalid wip limit '{n}': expected a number or 'none'"))?,
        ),
    };
    Ok(WipAssignment {
        status: status.to_string(),
        limit,
    })
}
