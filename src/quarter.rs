// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar quarter of the year.

use crate::Error;
use chrono::{Datelike, Month, NaiveDate};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A quarter of the year: January–March is [`Q1`](Quarter::Q1), through
/// October–December as [`Q4`](Quarter::Q4).
///
/// Arithmetic wraps modulo the four quarters and never fails; see
/// [`YearQuarter`](crate::YearQuarter) for quarter arithmetic that carries
/// a year component.
///
/// # Examples
///
/// ```
/// use almanac::Quarter;
///
/// assert_eq!(Quarter::of(3).unwrap(), Quarter::Q3);
/// assert_eq!(Quarter::Q4.plus(1), Quarter::Q1);
/// assert_eq!(Quarter::Q1.minus(2), Quarter::Q3);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quarter {
    /// January, February, March.
    Q1 = 1,
    /// April, May, June.
    Q2,
    /// July, August, September.
    Q3,
    /// October, November, December.
    Q4,
}

impl Quarter {
    /// Creates a quarter from its number, 1 to 4.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] for any other value.
    pub fn of(quarter: u32) -> Result<Self, Error> {
        match quarter {
            1 => Ok(Quarter::Q1),
            2 => Ok(Quarter::Q2),
            3 => Ok(Quarter::Q3),
            4 => Ok(Quarter::Q4),
            _ => Err(Error::OutOfRange {
                field: "quarter",
                value: i64::from(quarter),
            }),
        }
    }

    /// The quarter a month belongs to.
    pub fn from_month(month: Month) -> Self {
        Self::from_month_number(month.number_from_month())
    }

    /// The quarter a date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_month_number(date.month())
    }

    fn from_month_number(month: u32) -> Self {
        match month {
            1..=3 => Quarter::Q1,
            4..=6 => Quarter::Q2,
            7..=9 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    /// The quarter number, 1 to 4.
    #[inline]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// The first month of the quarter.
    pub const fn first_month(self) -> Month {
        match self {
            Quarter::Q1 => Month::January,
            Quarter::Q2 => Month::April,
            Quarter::Q3 => Month::July,
            Quarter::Q4 => Month::October,
        }
    }

    /// The quarter `quarters` later, wrapping across year ends.
    pub fn plus(self, quarters: i64) -> Self {
        let index = (i64::from(self.number()) - 1 + quarters % 4 + 4) % 4;
        match index {
            0 => Quarter::Q1,
            1 => Quarter::Q2,
            2 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    /// The quarter `quarters` earlier, wrapping across year ends.
    pub fn minus(self, quarters: i64) -> Self {
        self.plus(-(quarters % 4))
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

impl FromStr for Quarter {
    type Err = Error;

    /// Parses `"Q1"` to `"Q4"`, case-insensitive.
    fn from_str(text: &str) -> Result<Self, Error> {
        let digits = text.strip_prefix(['Q', 'q']).ok_or_else(|| Error::Parse {
            what: "quarter",
            input: text.to_owned(),
            reason: "expected a literal like \"Q3\"".to_owned(),
        })?;
        let number = digits.parse::<u32>().map_err(|e| Error::Parse {
            what: "quarter",
            input: text.to_owned(),
            reason: e.to_string(),
        })?;
        Self::of(number)
    }
}
