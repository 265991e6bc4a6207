// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn fake_clock_starts_at_given_instant() {
    let clock = FakeClock::new(1_000);
    assert_eq!(clock.now_secs(), 1_000);
}

#[test]
fn fake_clock_advances() {
    let clock = FakeClock::new(0);
    clock.advance(15);
    assert_eq!(clock.now_secs(), 15);
    clock.advance(5);
    assert_eq!(clock.now_secs(), 20);
}

#[test]
fn fake_clock_set_overrides() {
    let clock = FakeClock::new(0);
    clock.set(42);
    assert_eq!(clock.now_secs(), 42);
}

#[test]
fn now_formats_as_utc_timestamp() {
    let clock = FakeClock::new(0);
    assert_eq!(clock.now().to_rfc3339(), "1970-01-01T00:00:00+00:00");
}
