//! Whole-day date arithmetic for milestone and range checks.
//!
//! Everything here works on [`NaiveDate`], so comparisons are already at
//! midnight resolution; time-of-day never leaks into the counts.

use chrono::NaiveDate;

/// Signed number of days from `today` until `date`. Negative when `date`
/// is in the past.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Whether `date` is strictly before `today`.
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Whether `start` to `end` forms a valid (possibly single-day) range.
pub fn is_valid_date_range(start: NaiveDate, end: NaiveDate) -> bool {
    end >= start
}
