// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-of-week and time-of-day composite.

use chrono::{Duration, NaiveTime, Timelike, Weekday};
use std::cmp::Ordering;
use std::fmt;

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_DAY: i128 = 86_400 * NANOS_PER_SECOND;
const NANOS_PER_WEEK: i128 = 7 * NANOS_PER_DAY;

/// A moment of the week: a day of week plus a time of day, with no
/// attachment to any particular calendar date.
///
/// Duration arithmetic wraps modulo one week, so `Sun 23:00` plus two
/// hours is `Mon 01:00`.  The week is anchored on Monday for ordering.
/// A leap-second time folds into the following second under arithmetic.
///
/// # Examples
///
/// ```
/// use almanac::WeekdayTime;
/// use chrono::{Duration, NaiveTime, Weekday};
///
/// let open = WeekdayTime::new(Weekday::Mon, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
/// assert_eq!(open.to_string(), "Mon 08:30:00");
/// assert_eq!(open.minus(Duration::hours(12)).weekday(), Weekday::Sun);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WeekdayTime {
    weekday: Weekday,
    time: NaiveTime,
}

impl WeekdayTime {
    /// Creates a weekday-time.  Both components are already valid by type,
    /// so construction cannot fail.
    #[inline]
    pub const fn new(weekday: Weekday, time: NaiveTime) -> Self {
        Self { weekday, time }
    }

    /// The day-of-week component.
    #[inline]
    pub const fn weekday(self) -> Weekday {
        self.weekday
    }

    /// The time-of-day component.
    #[inline]
    pub const fn time(self) -> NaiveTime {
        self.time
    }

    /// This moment shifted `duration` later, wrapping around the week.
    pub fn plus(self, duration: Duration) -> Self {
        self.shifted(duration_nanos(duration))
    }

    /// This moment shifted `duration` earlier, wrapping around the week.
    pub fn minus(self, duration: Duration) -> Self {
        self.shifted(-duration_nanos(duration))
    }

    /// Nanoseconds since Monday midnight.
    fn nanos_into_week(self) -> i128 {
        i128::from(self.weekday.num_days_from_monday()) * NANOS_PER_DAY
            + i128::from(self.time.num_seconds_from_midnight()) * NANOS_PER_SECOND
            + i128::from(self.time.nanosecond())
    }

    fn shifted(self, delta: i128) -> Self {
        let total = (self.nanos_into_week() + delta).rem_euclid(NANOS_PER_WEEK);
        // The euclidean reduction leaves 0..=6 days into the week.
        let weekday = match total / NANOS_PER_DAY {
            0 => Weekday::Mon,
            1 => Weekday::Tue,
            2 => Weekday::Wed,
            3 => Weekday::Thu,
            4 => Weekday::Fri,
            5 => Weekday::Sat,
            _ => Weekday::Sun,
        };
        let in_day = total % NANOS_PER_DAY;
        let secs = (in_day / NANOS_PER_SECOND) as u32;
        let nanos = (in_day % NANOS_PER_SECOND) as u32;
        Self {
            weekday,
            time: NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos)
                .unwrap_or(NaiveTime::MIN),
        }
    }
}

// i128 keeps the shift arithmetic exact for the whole Duration domain,
// including Duration::MIN whose negation does not fit in i64 nanoseconds.
fn duration_nanos(duration: Duration) -> i128 {
    i128::from(duration.num_seconds()) * NANOS_PER_SECOND + i128::from(duration.subsec_nanos())
}

impl PartialOrd for WeekdayTime {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeekdayTime {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weekday.num_days_from_monday(), self.time)
            .cmp(&(other.weekday.num_days_from_monday(), other.time))
    }
}

impl fmt::Display for WeekdayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.weekday, self.time)
    }
}
