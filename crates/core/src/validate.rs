// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field-level validation for request records.
//!
//! The limits here are part of the outward contract: clients rely on the
//! exact lengths, ranges and key formats.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

pub const MIN_PROJECT_KEY_LENGTH: usize = 2;
pub const MAX_PROJECT_KEY_LENGTH: usize = 10;
pub const MAX_PROJECT_NAME_LENGTH: usize = 100;
pub const MAX_PROJECT_DESCRIPTION_LENGTH: usize = 2_000;
pub const MAX_EPIC_SUMMARY_LENGTH: usize = 200;
pub const MAX_WORK_ITEM_SUMMARY_LENGTH: usize = 500;
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;
pub const MAX_USER_REF_LENGTH: usize = 100;
pub const MAX_STATUS_NAME_LENGTH: usize = 50;
pub const MAX_BOARD_NAME_LENGTH: usize = 100;
pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 5;
pub const DEFAULT_PRIORITY: u8 = 3;

// Compile-time constant patterns, exercised by the tests.
static PROJECT_KEY_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^[A-Z][A-Z0-9]*$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^#[0-9A-Fa-f]{6}$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validate a required text field, returning the trimmed value.
pub fn required_text(field: &'static str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldRequired { field });
    }
    let actual = char_len(trimmed);
    if actual > max {
        return Err(Error::FieldTooLong { field, actual, max });
    }
    Ok(trimmed.to_string())
}

/// Validate an optional text field, returning `None` for blank input.
pub fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let actual = char_len(trimmed);
    if actual > max {
        return Err(Error::FieldTooLong { field, actual, max });
    }
    Ok(Some(trimmed.to_string()))
}

/// Validate a project key (`^[A-Z][A-Z0-9]*$`, 2 to 10 chars).
pub fn validate_project_key(key: &str) -> Result<()> {
    let actual = key.chars().count();
    if actual < MIN_PROJECT_KEY_LENGTH {
        return Err(Error::FieldTooShort {
            field: "Project key",
            actual,
            min: MIN_PROJECT_KEY_LENGTH,
        });
    }
    if actual > MAX_PROJECT_KEY_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Project key",
            actual,
            max: MAX_PROJECT_KEY_LENGTH,
        });
    }
    if !PROJECT_KEY_RE.is_match(key) {
        return Err(Error::InvalidFormat {
            field: "project key",
            value: key.to_string(),
            hint: "must start with an uppercase letter followed by uppercase letters or digits",
        });
    }
    Ok(())
}

/// Validate a priority in the range 1 to 5.
pub fn validate_priority(priority: u8) -> Result<()> {
    if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
        return Err(Error::OutOfRange {
            field: "Priority",
            actual: i64::from(priority),
            min: i64::from(MIN_PRIORITY),
            max: i64::from(MAX_PRIORITY),
        });
    }
    Ok(())
}

/// Validate a `#RRGGBB` color.
pub fn validate_color(color: &str) -> Result<()> {
    if !COLOR_RE.is_match(color) {
        return Err(Error::InvalidFormat {
            field: "color",
            value: color.to_string(),
            hint: "use a hex color like #3B82F6",
        });
    }
    Ok(())
}

/// Validate a non-negative order index.
pub fn validate_order_index(index: i64) -> Result<()> {
    if index < 0 {
        return Err(Error::OutOfRange {
            field: "Order index",
            actual: index,
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

/// Validate an optional WIP limit (at least 1 when set).
pub fn validate_wip_limit(limit: Option<u32>) -> Result<()> {
    if limit == Some(0) {
        return Err(Error::OutOfRange {
            field: "WIP limit",
            actual: 0,
            min: 1,
            max: i64::from(u32::MAX),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
