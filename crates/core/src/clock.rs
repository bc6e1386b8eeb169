// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time sources for entity timestamps.
//!
//! The engine never calls `Utc::now()` directly; it asks a [`Clock`] so that
//! tests can pin `created_at`/`updated_at` values.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Trait for getting the current wall clock time.
///
/// This allows injecting a fixed clock for testing.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

/// System clock backed by `chrono::Utc::now`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (*self).now()
    }
}

/// A manually driven clock.
///
/// Time only moves when [`FixedClock::advance`] or [`FixedClock::set`] is
/// called. Resolution is one millisecond.
#[derive(Debug)]
pub struct FixedClock {
    millis: AtomicI64,
}

impl FixedClock {
    /// Creates a clock pinned at the given instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        FixedClock {
            millis: AtomicI64::new(instant.timestamp_millis()),
        }
    }

    /// Pins the clock to a new instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        self.millis
            .store(instant.timestamp_millis(), Ordering::SeqCst);
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.millis
            .fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        FixedClock {
            millis: AtomicI64::new(0),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let ms = self.millis.load(Ordering::SeqCst);
        Utc.timestamp_millis_opt(ms)
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
