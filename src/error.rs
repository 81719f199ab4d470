// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible operation in the crate.
//!
//! All errors are raised synchronously at the point of the invalid
//! operation; nothing is caught or downgraded internally.  The only
//! documented exception is [`DateRange::length_in_days`], which saturates
//! instead of failing — its strict counterpart [`DateRange::to_days`]
//! reports [`Error::Overflow`].
//!
//! [`DateRange::length_in_days`]: crate::DateRange::length_in_days
//! [`DateRange::to_days`]: crate::DateRange::to_days

use crate::DateRange;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced by the calendar value types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A range constructor received bounds that violate the ordering or
    /// sentinel invariants (`start > end`, a start at the maximum date, or
    /// an end at the minimum date).
    #[error("invalid date range {start}/{end}: {reason}")]
    InvalidRange {
        /// The offending inclusive start.
        start: NaiveDate,
        /// The offending exclusive end.
        end: NaiveDate,
        /// Which invariant was violated.
        reason: &'static str,
    },

    /// `intersection` or `union` was asked to combine two ranges that
    /// neither overlap nor abut.
    #[error("date ranges {a} and {b} neither overlap nor abut")]
    NotConnected {
        /// Left-hand range.
        a: DateRange,
        /// Right-hand range.
        b: DateRange,
    },

    /// A strict date or day-count computation left the representable range.
    #[error("{op} overflows the supported date range")]
    Overflow {
        /// The operation that overflowed.
        op: &'static str,
    },

    /// Malformed textual input.
    #[error("cannot parse {what} from {input:?}: {reason}")]
    Parse {
        /// What was being parsed (a "date range", a "quarter", ...).
        what: &'static str,
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A numeric field lies outside its valid domain.
    #[error("{field} out of range: {value}")]
    OutOfRange {
        /// The field name.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
}
