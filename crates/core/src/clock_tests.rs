// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn instant(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn fixed_clock_returns_pinned_time() {
    let clock = FixedClock::at(instant("2026-03-01T10:00:00Z"));
    assert_eq!(clock.now(), instant("2026-03-01T10:00:00Z"));
    assert_eq!(clock.now(), clock.now());
}

#[test]
fn fixed_clock_advance() {
    let clock = FixedClock::at(instant("2026-03-01T10:00:00Z"));
    clock.advance(Duration::minutes(5));
    assert_eq!(clock.now(), instant("2026-03-01T10:05:00Z"));
}

#[test]
fn fixed_clock_set() {
    let clock = FixedClock::default();
    assert_eq!(clock.now(), DateTime::<Utc>::UNIX_EPOCH);
    clock.set(instant("2030-01-01T00:00:00Z"));
    assert_eq!(clock.now(), instant("2030-01-01T00:00:00Z"));
}

#[test]
fn clock_by_reference() {
    let clock = FixedClock::at(instant("2026-03-01T10:00:00Z"));
    let by_ref: &FixedClock = &clock;
    assert_eq!(Clock::now(&by_ref), clock.now());
}

#[test]
fn system_clock_is_close_to_now() {
    let before = Utc::now();
    let now = SystemClock.now();
    assert!(now >= before);
}
