// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Year-and-quarter composite.

use crate::{Error, Quarter};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// A specific quarter of a specific year, such as `2012-Q3`.
///
/// Unlike [`Quarter`], arithmetic here carries a year component and is
/// checked: stepping past the calendar's representable years reports
/// [`Error::Overflow`] instead of wrapping.
///
/// # Examples
///
/// ```
/// use almanac::{Quarter, YearQuarter};
///
/// let q = YearQuarter::of(2012, Quarter::Q4).unwrap();
/// assert_eq!(q.plus_quarters(1).unwrap().to_string(), "2013-Q1");
/// assert_eq!(q.minus_quarters(4).unwrap().year(), 2011);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct YearQuarter {
    year: i32,
    quarter: Quarter,
}

impl YearQuarter {
    /// Creates a year-quarter, validating the year against the calendar's
    /// representable years.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if no date of `year` is representable.
    pub fn of(year: i32, quarter: Quarter) -> Result<Self, Error> {
        if year < NaiveDate::MIN.year() || year > NaiveDate::MAX.year() {
            return Err(Error::OutOfRange {
                field: "year",
                value: i64::from(year),
            });
        }
        Ok(Self { year, quarter })
    }

    /// The year-quarter a date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            quarter: Quarter::from_date(date),
        }
    }

    /// The year component.
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// The quarter component.
    #[inline]
    pub const fn quarter(self) -> Quarter {
        self.quarter
    }

    /// The year-quarter `quarters` later.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if the result leaves the representable years.
    pub fn plus_quarters(self, quarters: i64) -> Result<Self, Error> {
        const OVERFLOW: Error = Error::Overflow {
            op: "year-quarter addition",
        };
        let index = i64::from(self.year) * 4 + i64::from(self.quarter.number()) - 1;
        let shifted = index.checked_add(quarters).ok_or(OVERFLOW)?;
        let year = i32::try_from(shifted.div_euclid(4)).map_err(|_| OVERFLOW)?;
        let quarter = match shifted.rem_euclid(4) {
            0 => Quarter::Q1,
            1 => Quarter::Q2,
            2 => Quarter::Q3,
            _ => Quarter::Q4,
        };
        Self::of(year, quarter).map_err(|_| OVERFLOW)
    }

    /// The year-quarter `quarters` earlier.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if the result leaves the representable years.
    pub fn minus_quarters(self, quarters: i64) -> Result<Self, Error> {
        let negated = quarters.checked_neg().ok_or(Error::Overflow {
            op: "year-quarter subtraction",
        })?;
        self.plus_quarters(negated)
    }

    /// The first date of the quarter.
    pub fn first_day(self) -> NaiveDate {
        let month = self.quarter.first_month().number_from_month();
        NaiveDate::from_ymd_opt(self.year, month, 1)
            .expect("year was validated at construction")
    }

    /// The last date of the quarter.
    pub fn last_day(self) -> NaiveDate {
        let (month, day) = match self.quarter {
            Quarter::Q1 => (3, 31),
            Quarter::Q2 => (6, 30),
            Quarter::Q3 => (9, 30),
            Quarter::Q4 => (12, 31),
        };
        NaiveDate::from_ymd_opt(self.year, month, day)
            .expect("year was validated at construction")
    }

    /// The number of days in the quarter: 90 to 92, leap years giving Q1
    /// its 91st day.
    pub fn length_in_days(self) -> i64 {
        (self.last_day() - self.first_day()).num_days() + 1
    }

    /// True if `date` falls within this quarter.
    pub fn contains(self, date: NaiveDate) -> bool {
        self.first_day() <= date && date <= self.last_day()
    }
}

impl fmt::Display for YearQuarter {
    /// Formats as `"2012-Q3"`; years outside 0..=9999 carry an explicit
    /// sign, matching the calendar's own year rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..=9999).contains(&self.year) {
            write!(f, "{:04}-{}", self.year, self.quarter)
        } else {
            write!(f, "{:+}-{}", self.year, self.quarter)
        }
    }
}

impl FromStr for YearQuarter {
    type Err = Error;

    /// Parses `"2012-Q3"`.
    fn from_str(text: &str) -> Result<Self, Error> {
        let parse_error = |reason: String| Error::Parse {
            what: "year-quarter",
            input: text.to_owned(),
            reason,
        };
        let (year, quarter) = text
            .rsplit_once('-')
            .ok_or_else(|| parse_error("expected a literal like \"2012-Q3\"".to_owned()))?;
        let year = year
            .parse::<i32>()
            .map_err(|e| parse_error(e.to_string()))?;
        Self::of(year, quarter.parse()?)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for YearQuarter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            quarter: Quarter,
        }

        let raw = Raw::deserialize(deserializer)?;
        YearQuarter::of(raw.year, raw.quarter).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_of_validates_year() {
        assert!(YearQuarter::of(2012, Quarter::Q3).is_ok());
        let too_far = i64::from(NaiveDate::MAX.year()) + 1;
        assert!(matches!(
            YearQuarter::of(too_far as i32, Quarter::Q1),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_date() {
        let q = YearQuarter::from_date(date(2012, 7, 28));
        assert_eq!(q.year(), 2012);
        assert_eq!(q.quarter(), Quarter::Q3);
    }

    #[test]
    fn test_plus_quarters_carries_the_year() {
        let q = YearQuarter::of(2012, Quarter::Q4).unwrap();
        assert_eq!(q.plus_quarters(1).unwrap(), YearQuarter::of(2013, Quarter::Q1).unwrap());
        assert_eq!(q.plus_quarters(5).unwrap(), YearQuarter::of(2014, Quarter::Q1).unwrap());
        assert_eq!(q.plus_quarters(-4).unwrap(), YearQuarter::of(2011, Quarter::Q4).unwrap());
        assert_eq!(q.plus_quarters(0).unwrap(), q);
    }

    #[test]
    fn test_minus_quarters_carries_the_year() {
        let q = YearQuarter::of(2012, Quarter::Q1).unwrap();
        assert_eq!(q.minus_quarters(1).unwrap(), YearQuarter::of(2011, Quarter::Q4).unwrap());
        assert_eq!(q.minus_quarters(8).unwrap(), YearQuarter::of(2010, Quarter::Q1).unwrap());
    }

    #[test]
    fn test_quarter_arithmetic_overflow() {
        let last = YearQuarter::of(NaiveDate::MAX.year(), Quarter::Q4).unwrap();
        assert!(matches!(last.plus_quarters(1), Err(Error::Overflow { .. })));
        assert!(matches!(last.plus_quarters(i64::MAX), Err(Error::Overflow { .. })));

        let first = YearQuarter::of(NaiveDate::MIN.year(), Quarter::Q1).unwrap();
        assert!(matches!(first.minus_quarters(1), Err(Error::Overflow { .. })));
        assert!(matches!(first.minus_quarters(i64::MIN), Err(Error::Overflow { .. })));
    }

    #[test]
    fn test_first_and_last_day() {
        let q = YearQuarter::of(2012, Quarter::Q3).unwrap();
        assert_eq!(q.first_day(), date(2012, 7, 1));
        assert_eq!(q.last_day(), date(2012, 9, 30));
    }

    #[test]
    fn test_length_in_days_tracks_leap_years() {
        assert_eq!(YearQuarter::of(2012, Quarter::Q1).unwrap().length_in_days(), 91);
        assert_eq!(YearQuarter::of(2011, Quarter::Q1).unwrap().length_in_days(), 90);
        assert_eq!(YearQuarter::of(2012, Quarter::Q2).unwrap().length_in_days(), 91);
        assert_eq!(YearQuarter::of(2012, Quarter::Q3).unwrap().length_in_days(), 92);
        assert_eq!(YearQuarter::of(2012, Quarter::Q4).unwrap().length_in_days(), 92);
    }

    #[test]
    fn test_contains() {
        let q = YearQuarter::of(2012, Quarter::Q3).unwrap();
        assert!(q.contains(date(2012, 7, 1)));
        assert!(q.contains(date(2012, 9, 30)));
        assert!(!q.contains(date(2012, 6, 30)));
        assert!(!q.contains(date(2012, 10, 1)));
    }

    #[test]
    fn test_ordering_by_year_then_quarter() {
        let a = YearQuarter::of(2011, Quarter::Q4).unwrap();
        let b = YearQuarter::of(2012, Quarter::Q1).unwrap();
        let c = YearQuarter::of(2012, Quarter::Q3).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_display_and_parse() {
        let q = YearQuarter::of(2012, Quarter::Q3).unwrap();
        assert_eq!(q.to_string(), "2012-Q3");
        assert_eq!("2012-Q3".parse::<YearQuarter>().unwrap(), q);

        let bce = YearQuarter::of(-1, Quarter::Q2).unwrap();
        assert_eq!(bce.to_string().parse::<YearQuarter>().unwrap(), bce);

        assert!(matches!("2012".parse::<YearQuarter>(), Err(Error::Parse { .. })));
        assert!(matches!("x-Q3".parse::<YearQuarter>(), Err(Error::Parse { .. })));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_revalidates() {
        let q = YearQuarter::of(2012, Quarter::Q3).unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(serde_json::from_str::<YearQuarter>(&json).unwrap(), q);

        let invalid = r#"{"year":999999999,"quarter":"Q1"}"#;
        assert!(serde_json::from_str::<YearQuarter>(invalid).is_err());
    }
}
