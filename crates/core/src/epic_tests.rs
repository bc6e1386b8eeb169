// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    empty = { 0, 0, 0 },
    half = { 4, 2, 50 },
    third = { 3, 1, 33 },
    all = { 5, 5, 100 },
)]
fn progress_percent(total: usize, completed: usize, expected: u8) {
    let progress = EpicProgress {
        epic_id: 1,
        work_item_count: total,
        completed_work_item_count: completed,
    };
    assert_eq!(progress.percent_complete(), expected);
}
