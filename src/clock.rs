// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Settable clock for tests.

use crate::Error;
use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};
use parking_lot::Mutex;

/// A clock whose instant and zone offset can be set at will.
///
/// Intended for tests that need deterministic, steerable time.  The
/// instant and offset live behind a single exclusive lock; every read and
/// mutation takes it, so concurrent [`advance`](MutableClock::advance)
/// calls compose with no lost updates.
///
/// # Examples
///
/// ```
/// use almanac::MutableClock;
/// use chrono::Duration;
///
/// let clock = MutableClock::epoch_utc();
/// clock.advance(Duration::seconds(90)).unwrap();
/// assert_eq!(clock.instant().timestamp(), 90);
/// ```
#[derive(Debug)]
pub struct MutableClock {
    state: Mutex<ClockState>,
}

#[derive(Debug)]
struct ClockState {
    instant: DateTime<Utc>,
    offset: FixedOffset,
}

impl MutableClock {
    /// Creates a clock reading `instant`, reporting times in `offset`.
    pub fn new(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self {
            state: Mutex::new(ClockState { instant, offset }),
        }
    }

    /// Creates a clock at the Unix epoch with a zero offset.
    pub fn epoch_utc() -> Self {
        Self::new(DateTime::UNIX_EPOCH, Utc.fix())
    }

    /// The current reading in the clock's zone offset.
    pub fn now(&self) -> DateTime<FixedOffset> {
        let state = self.state.lock();
        state.instant.with_timezone(&state.offset)
    }

    /// The current instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.state.lock().instant
    }

    /// The current zone offset.
    pub fn offset(&self) -> FixedOffset {
        self.state.lock().offset
    }

    /// Replaces the instant, leaving the offset untouched.
    pub fn set_instant(&self, instant: DateTime<Utc>) {
        self.state.lock().instant = instant;
    }

    /// Replaces the zone offset, leaving the instant untouched.
    pub fn set_offset(&self, offset: FixedOffset) {
        self.state.lock().offset = offset;
    }

    /// Moves the clock by `amount`, which may be negative.
    ///
    /// The read-modify-write happens under the lock, so concurrent calls
    /// each apply exactly once.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if the shifted instant is unrepresentable; the
    /// clock is left unchanged.
    pub fn advance(&self, amount: Duration) -> Result<(), Error> {
        let mut state = self.state.lock();
        state.instant = state
            .instant
            .checked_add_signed(amount)
            .ok_or(Error::Overflow { op: "clock advance" })?;
        Ok(())
    }
}

impl Default for MutableClock {
    fn default() -> Self {
        Self::epoch_utc()
    }
}
