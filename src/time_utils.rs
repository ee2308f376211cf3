// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar dates.

use chrono::{Days, Local, NaiveDate};

/// Number of days in the trailing weekly window.
pub const WEEK_DAYS: u64 = 7;

/// Today's date in the server's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The seven days ending at `reference` inclusive, oldest first.
///
/// Not aligned to calendar weeks: the last entry is always `reference`.
/// `None` when the window would start before the earliest representable date.
pub fn trailing_week(reference: NaiveDate) -> Option<Vec<NaiveDate>> {
    let start = reference.checked_sub_days(Days::new(WEEK_DAYS - 1))?;
    Some(start.iter_days().take(WEEK_DAYS as usize).collect())
}
