// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    nothing_set = { None, None, "warn" },
    config_only = { None, Some("info"), "info" },
    env_wins = { Some("debug"), Some("info"), "debug" },
    blank_config = { None, Some("  "), "warn" },
    module_directive = { Some("pk_core=trace"), None, "pk_core=trace" },
)]
fn directive_precedence(env_value: Option<&str>, config: Option<&str>, expected: &str) {
    assert_eq!(directive(env_value.map(String::from), config), expected);
}

#[test]
fn init_twice_does_not_panic() {
    init(Some("off"));
    init(Some("not a level ["));
}
