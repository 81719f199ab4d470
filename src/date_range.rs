// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Half-open calendar date interval.
//!
//! This module provides:
//! - [`DateRange`]: an immutable interval `[start, end)` over [`NaiveDate`]
//! - [`DateRangeIter`]: lazy iteration over every date in a range
//!
//! # Unbounded ranges
//!
//! The calendar has a finite minimum and maximum representable date, so an
//! interval that is open-ended on either side is modelled by reserving
//! [`NaiveDate::MIN`] and [`NaiveDate::MAX`] as sentinels rather than by a
//! tagged "infinite" variant.  Comparisons stay ordinary date comparisons;
//! the price is a handful of sentinel-adjacent special cases, documented on
//! each operation.  Consequently a bounded range may never *start* at the
//! maximum date nor *end* at the minimum date: those bounds are reserved.

use crate::Error;
use chrono::{Days, NaiveDate};
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// DateRange
// ═══════════════════════════════════════════════════════════════════════════

/// An immutable half-open interval of calendar dates, `[start, end)`.
///
/// The start is inclusive, the end exclusive; `start == end` denotes an
/// empty range anchored at that date.  A start equal to [`NaiveDate::MIN`]
/// means "unbounded start", an end equal to [`NaiveDate::MAX`] means
/// "unbounded end".
///
/// Every constructor validates its bounds, and every value is permanently
/// immutable once built; [`with_start`](DateRange::with_start) and friends
/// return new, re-validated ranges.
///
/// # Examples
///
/// ```
/// use almanac::DateRange;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2012, 7, 28).unwrap();
/// let end = NaiveDate::from_ymd_opt(2012, 7, 31).unwrap();
/// let range = DateRange::new(start, end).unwrap();
///
/// assert_eq!(range.length_in_days(), 3);
/// assert_eq!(range.to_string(), "2012-07-28/2012-07-31");
/// assert!(range.contains(NaiveDate::from_ymd_opt(2012, 7, 30).unwrap()));
/// assert!(!range.contains(end));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// The range of all representable dates: unbounded on both sides.
    pub const ALL: Self = Self {
        start: NaiveDate::MIN,
        end: NaiveDate::MAX,
    };

    // ── constructors ──────────────────────────────────────────────────

    /// Creates a range from an inclusive start and an exclusive end.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] if `start > end`, if `start` is the maximum
    /// date, or if `end` is the minimum date (both extremes are reserved as
    /// the unbounded sentinels).
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidRange {
                start,
                end,
                reason: "start is after the exclusive end",
            });
        }
        if start == NaiveDate::MAX {
            return Err(Error::InvalidRange {
                start,
                end,
                reason: "the maximum date is reserved as the unbounded-end sentinel",
            });
        }
        if end == NaiveDate::MIN {
            return Err(Error::InvalidRange {
                start,
                end,
                reason: "the minimum date is reserved as the unbounded-start sentinel",
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from an inclusive start and an *inclusive* end.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if `end_inclusive` is the maximum date (one more
    /// day cannot be represented; use [`DateRange::unbounded_end`] for an
    /// open-ended range), plus the [`DateRange::new`] validation errors.
    pub fn closed(start: NaiveDate, end_inclusive: NaiveDate) -> Result<Self, Error> {
        let end = end_inclusive.succ_opt().ok_or(Error::Overflow {
            op: "inclusive end plus one day",
        })?;
        Self::new(start, end)
    }

    /// Creates an empty range anchored at `date`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] if `date` is the minimum or maximum date: an
    /// empty range cannot anchor at a sentinel.
    pub fn empty(date: NaiveDate) -> Result<Self, Error> {
        Self::new(date, date)
    }

    /// Creates a range spanning `days` days from `start`.
    ///
    /// `days` is an unsigned count, so a negative amount is unrepresentable.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if `start + days` passes the maximum date, plus
    /// the [`DateRange::new`] validation errors.
    pub fn from_days(start: NaiveDate, days: Days) -> Result<Self, Error> {
        let end = start.checked_add_days(days).ok_or(Error::Overflow {
            op: "start date plus day count",
        })?;
        Self::new(start, end)
    }

    /// Returns the range of all representable dates, equal to
    /// [`DateRange::ALL`].
    #[inline]
    pub fn unbounded() -> Self {
        Self::ALL
    }

    /// Creates a range with an unbounded start and the given exclusive end.
    pub fn unbounded_start(end: NaiveDate) -> Result<Self, Error> {
        Self::new(NaiveDate::MIN, end)
    }

    /// Creates a range with the given inclusive start and an unbounded end.
    pub fn unbounded_end(start: NaiveDate) -> Result<Self, Error> {
        Self::new(start, NaiveDate::MAX)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The inclusive start, possibly [`NaiveDate::MIN`].
    #[inline]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// The exclusive end, possibly [`NaiveDate::MAX`].
    #[inline]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// The inclusive end: the day before [`end`](DateRange::end), or the
    /// maximum date when the end is unbounded.
    ///
    /// For an empty range this is the day *before* the anchor.
    #[inline]
    pub fn end_inclusive(&self) -> NaiveDate {
        if self.is_unbounded_end() {
            return NaiveDate::MAX;
        }
        // `end` is never NaiveDate::MIN, so the predecessor exists.
        self.end.pred_opt().unwrap_or(NaiveDate::MIN)
    }

    /// True if the range contains no dates (`start == end`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True if the start is the unbounded sentinel.
    #[inline]
    pub fn is_unbounded_start(&self) -> bool {
        self.start == NaiveDate::MIN
    }

    /// True if the end is the unbounded sentinel.
    #[inline]
    pub fn is_unbounded_end(&self) -> bool {
        self.end == NaiveDate::MAX
    }

    /// The number of days in the range, saturating at `i32::MAX` when
    /// either bound is unbounded or the count does not fit.
    ///
    /// The strict counterpart is [`to_days`](DateRange::to_days).
    pub fn length_in_days(&self) -> i32 {
        if self.is_unbounded_start() || self.is_unbounded_end() {
            return i32::MAX;
        }
        let days = (self.end - self.start).num_days();
        i32::try_from(days).unwrap_or(i32::MAX)
    }

    /// The exact number of days in the range as a [`Days`] amount.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if either bound is unbounded: an infinite length
    /// has no finite day count.  The lossy counterpart is
    /// [`length_in_days`](DateRange::length_in_days), which saturates.
    pub fn to_days(&self) -> Result<Days, Error> {
        if self.is_unbounded_start() || self.is_unbounded_end() {
            return Err(Error::Overflow {
                op: "day count of an unbounded range",
            });
        }
        // start <= end, so the difference is non-negative.
        Ok(Days::new((self.end - self.start).num_days() as u64))
    }

    // ── derived copies ────────────────────────────────────────────────

    /// Returns a copy of this range with the start replaced, re-validated.
    pub fn with_start(&self, start: NaiveDate) -> Result<Self, Error> {
        Self::new(start, self.end)
    }

    /// Returns a copy of this range with the exclusive end replaced,
    /// re-validated.
    pub fn with_end(&self, end: NaiveDate) -> Result<Self, Error> {
        Self::new(self.start, end)
    }

    /// Returns a copy of this range with the start adjusted by a pure
    /// function, re-validated.
    ///
    /// ```
    /// use almanac::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let range: DateRange = "2012-07-28/2012-07-31".parse().unwrap();
    /// let widened = range.map_start(|d| d - chrono::Days::new(7)).unwrap();
    /// assert_eq!(widened.start(), NaiveDate::from_ymd_opt(2012, 7, 21).unwrap());
    /// ```
    pub fn map_start(&self, adjuster: impl FnOnce(NaiveDate) -> NaiveDate) -> Result<Self, Error> {
        Self::new(adjuster(self.start), self.end)
    }

    /// Returns a copy of this range with the exclusive end adjusted by a
    /// pure function, re-validated.
    pub fn map_end(&self, adjuster: impl FnOnce(NaiveDate) -> NaiveDate) -> Result<Self, Error> {
        Self::new(self.start, adjuster(self.end))
    }

    // ── queries ───────────────────────────────────────────────────────

    /// True if `date` falls within the range.  Always false for an empty
    /// range, and false for the maximum date (a sentinel, not an occupied
    /// day).
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// True if every date of `other` lies within this range.
    ///
    /// An empty `other` is enclosed when its anchor lies in
    /// `[start, end)` — anchored at the start counts, anchored exactly at
    /// the exclusive end does not (it sits just past the range).  An empty
    /// range encloses only a range equal to itself.
    pub fn encloses(&self, other: &DateRange) -> bool {
        if other.is_empty() && other.start == self.end {
            return self.is_empty() && self.start == other.start;
        }
        self.start <= other.start && other.end <= self.end
    }

    /// True if the ranges touch at exactly one boundary without sharing any
    /// date.
    #[inline]
    pub fn abuts(&self, other: &DateRange) -> bool {
        (self.end == other.start) != (self.start == other.end)
    }

    /// True if the ranges overlap or abut — no gap lies between them.
    #[inline]
    pub fn is_connected(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// True if the ranges share at least one date, or are the same empty
    /// anchor point.  Equivalent to `is_connected && !abuts`.
    #[inline]
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.is_connected(other) && !self.abuts(other)
    }

    /// True if this range ends on or before the start of `other`.
    ///
    /// A range is never before a range equal to itself; an empty range is
    /// positioned at its anchor for ordering purposes.
    #[inline]
    pub fn is_before(&self, other: &DateRange) -> bool {
        self.end <= other.start && self != other
    }

    /// True if this range starts on or after the end of `other`.
    #[inline]
    pub fn is_after(&self, other: &DateRange) -> bool {
        self.start >= other.end && self != other
    }

    /// True if every date of the range, or the anchor of an empty range,
    /// falls strictly before `date`.
    #[inline]
    pub fn is_before_date(&self, date: NaiveDate) -> bool {
        self.end <= date && self.start < date
    }

    /// True if every date of the range, or the anchor of an empty range,
    /// falls strictly after `date`.
    #[inline]
    pub fn is_after_date(&self, date: NaiveDate) -> bool {
        self.start > date
    }

    // ── combinators ───────────────────────────────────────────────────

    /// The overlap of two connected ranges.  Abutting ranges intersect in
    /// an empty range at the shared boundary.
    ///
    /// # Errors
    ///
    /// [`Error::NotConnected`] if the ranges neither overlap nor abut.
    pub fn intersection(&self, other: &DateRange) -> Result<Self, Error> {
        if !self.is_connected(other) {
            return Err(Error::NotConnected {
                a: *self,
                b: *other,
            });
        }
        Self::new(self.start.max(other.start), self.end.min(other.end))
    }

    /// The combined extent of two connected ranges.
    ///
    /// # Errors
    ///
    /// [`Error::NotConnected`] if the ranges neither overlap nor abut; use
    /// [`span`](DateRange::span) to bridge a gap.
    pub fn union(&self, other: &DateRange) -> Result<Self, Error> {
        if !self.is_connected(other) {
            return Err(Error::NotConnected {
                a: *self,
                b: *other,
            });
        }
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// The smallest range enclosing both inputs, connected or not.
    ///
    /// `a.span(b).encloses(a)` and `a.span(b).encloses(b)` hold, except
    /// that the boundary rule of [`encloses`](DateRange::encloses) places
    /// an empty input anchored exactly at the span's end just outside.
    pub fn span(&self, other: &DateRange) -> Self {
        // Bounds taken from two valid ranges keep every invariant, so no
        // re-validation is needed.
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    // ── iteration ─────────────────────────────────────────────────────

    /// A lazy iterator over every date in `[start, end)`.
    ///
    /// The iterator is restartable (call `iter` again) and never
    /// materialises the range; an unbounded-end range iterates to the last
    /// representable day.
    ///
    /// ```
    /// use almanac::DateRange;
    ///
    /// let range: DateRange = "2012-07-28/2012-07-31".parse().unwrap();
    /// let dates: Vec<_> = range.iter().collect();
    /// assert_eq!(dates.len(), 3);
    /// assert_eq!(dates[0], range.start());
    /// ```
    #[inline]
    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            cur: self.start,
            end: self.end,
        }
    }
}

// ── Display / FromStr ─────────────────────────────────────────────────────

impl fmt::Display for DateRange {
    /// Formats as `"{start}/{end}"` in ISO-8601, the sentinels rendered as
    /// the calendar's extreme dates (signed years outside 0..=9999).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

impl FromStr for DateRange {
    type Err = Error;

    /// Parses `"{start}/{end}"`.  Each side is an ISO-8601 date, or a
    /// case-insensitive day-count literal `PnD` on at most one side; the
    /// missing bound is computed from the date side.
    ///
    /// ```
    /// use almanac::DateRange;
    ///
    /// let range: DateRange = "2012-07-28/P3D".parse().unwrap();
    /// assert_eq!(range.to_string(), "2012-07-28/2012-07-31");
    /// assert_eq!(range, "P3D/2012-07-31".parse().unwrap());
    /// ```
    fn from_str(text: &str) -> Result<Self, Error> {
        let (lhs, rhs) = text
            .split_once('/')
            .ok_or_else(|| parse_err(text, "missing '/' separator"))?;
        match (is_day_count(lhs), is_day_count(rhs)) {
            (true, true) => Err(parse_err(
                text,
                "a day-count literal is only allowed on one side",
            )),
            (false, false) => Self::new(parse_date(lhs)?, parse_date(rhs)?),
            (false, true) => {
                let start = parse_date(lhs)?;
                Self::from_days(start, Days::new(parse_day_count(rhs)?))
            }
            (true, false) => {
                let end = parse_date(rhs)?;
                let start = end
                    .checked_sub_days(Days::new(parse_day_count(lhs)?))
                    .ok_or(Error::Overflow {
                        op: "end date minus day count",
                    })?;
                Self::new(start, end)
            }
        }
    }
}

#[inline]
fn is_day_count(side: &str) -> bool {
    side.starts_with(['P', 'p'])
}

fn parse_date(side: &str) -> Result<NaiveDate, Error> {
    side.parse::<NaiveDate>()
        .map_err(|e| parse_err(side, e.to_string()))
}

fn parse_day_count(side: &str) -> Result<u64, Error> {
    let digits = side
        .strip_prefix(['P', 'p'])
        .and_then(|rest| rest.strip_suffix(['D', 'd']))
        .ok_or_else(|| parse_err(side, "expected a day-count literal like \"P3D\""))?;
    digits
        .parse::<u64>()
        .map_err(|e| parse_err(side, e.to_string()))
}

fn parse_err(input: &str, reason: impl Into<String>) -> Error {
    Error::Parse {
        what: "date range",
        input: input.to_owned(),
        reason: reason.into(),
    }
}

// ── Iteration ─────────────────────────────────────────────────────────────

/// Lazy iterator over the dates of a [`DateRange`], created by
/// [`DateRange::iter`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    cur: NaiveDate,
    end: NaiveDate,
}

impl Iterator for DateRangeIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.cur >= self.end {
            return None;
        }
        let date = self.cur;
        // cur < end <= MAX, so the successor exists.
        self.cur = date.succ_opt().unwrap_or(self.end);
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let days = (self.end - self.cur).num_days().max(0);
        let days = usize::try_from(days).unwrap_or(usize::MAX);
        (days, Some(days))
    }
}

impl ExactSizeIterator for DateRangeIter {}

impl FusedIterator for DateRangeIter {}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

// Serialised as a struct with `start`/`end` date fields; deserialisation
// routes through `DateRange::new` so stored values obey the invariants.
#[cfg(feature = "serde")]
impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("DateRange", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start: NaiveDate,
            end: NaiveDate,
        }

        let raw = Raw::deserialize(deserializer)?;
        DateRange::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
