// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Packed decimal encodings of dates and times.
//!
//! Each codec maps a calendar value to a single decimal-readable integer
//! and back: `2012-07-28` packs to `20120728`, `08:30:15` to `83015`.
//! Decoding validates every field, so a packed value round-trips exactly
//! or is rejected.
//!
//! The date codecs cover years 1000 to 9999 — the span where the `YYYY`
//! field has a fixed width.
//!
//! ```
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2012, 7, 28).unwrap();
//! assert_eq!(almanac::packed::pack_date(date).unwrap(), 20120728);
//! assert_eq!(almanac::packed::unpack_date(20120728).unwrap(), date);
//! ```

use crate::Error;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Packs a date as `YYYYMMDD`.
///
/// # Errors
///
/// [`Error::OutOfRange`] if the year is outside 1000..=9999.
pub fn pack_date(date: NaiveDate) -> Result<i32, Error> {
    let year = date.year();
    if !(1000..=9999).contains(&year) {
        return Err(Error::OutOfRange {
            field: "packed date year",
            value: i64::from(year),
        });
    }
    Ok(year * 10_000 + date.month() as i32 * 100 + date.day() as i32)
}

/// Unpacks a `YYYYMMDD` value.
///
/// # Errors
///
/// [`Error::OutOfRange`] if the year field is outside 1000..=9999 or the
/// month/day fields do not name a calendar date.
pub fn unpack_date(packed: i32) -> Result<NaiveDate, Error> {
    let out_of_range = Error::OutOfRange {
        field: "packed date",
        value: i64::from(packed),
    };
    let year = packed / 10_000;
    if !(1000..=9999).contains(&year) {
        return Err(out_of_range);
    }
    let month = (packed / 100 % 100) as u32;
    let day = (packed % 100) as u32;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(out_of_range)
}

/// Packs a time of day as `HHMM`, truncating seconds.
pub fn pack_hour_min(time: NaiveTime) -> u32 {
    time.hour() * 100 + time.minute()
}

/// Unpacks an `HHMM` value.
///
/// # Errors
///
/// [`Error::OutOfRange`] if either field is out of range.
pub fn unpack_hour_min(packed: u32) -> Result<NaiveTime, Error> {
    NaiveTime::from_hms_opt(packed / 100, packed % 100, 0).ok_or(Error::OutOfRange {
        field: "packed hour-minute",
        value: i64::from(packed),
    })
}

/// Packs a time of day as `HHMMSS`, truncating sub-second precision.
pub fn pack_time(time: NaiveTime) -> u32 {
    time.hour() * 10_000 + time.minute() * 100 + time.second()
}

/// Unpacks an `HHMMSS` value.
///
/// # Errors
///
/// [`Error::OutOfRange`] if any field is out of range.
pub fn unpack_time(packed: u32) -> Result<NaiveTime, Error> {
    NaiveTime::from_hms_opt(packed / 10_000, packed / 100 % 100, packed % 100).ok_or(
        Error::OutOfRange {
            field: "packed time",
            value: i64::from(packed),
        },
    )
}

/// Packs a date-time as `YYYYMMDDHHMMSS`.
///
/// # Errors
///
/// [`Error::OutOfRange`] if the date part does not pack (see
/// [`pack_date`]).
pub fn pack_date_time(datetime: NaiveDateTime) -> Result<i64, Error> {
    let date = i64::from(pack_date(datetime.date())?);
    Ok(date * 1_000_000 + i64::from(pack_time(datetime.time())))
}

/// Unpacks a `YYYYMMDDHHMMSS` value.
///
/// # Errors
///
/// [`Error::OutOfRange`] if any field is out of range.
pub fn unpack_date_time(packed: i64) -> Result<NaiveDateTime, Error> {
    let out_of_range = Error::OutOfRange {
        field: "packed date-time",
        value: packed,
    };
    if packed < 0 {
        return Err(out_of_range);
    }
    let date_part = i32::try_from(packed / 1_000_000).map_err(|_| out_of_range.clone())?;
    let time_part = (packed % 1_000_000) as u32;
    Ok(unpack_date(date_part)?.and_time(unpack_time(time_part)?))
}
