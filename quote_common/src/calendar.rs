//! Calendar and rounding helpers.

use chrono::{Datelike, Local, NaiveDate};

/// Today's date on the local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole years elapsed from `from` to `today`.
///
/// One year is subtracted when `today`'s month/day precedes `from`'s month/day,
/// so the count only ticks over on the anniversary itself. A `from` date in the
/// future yields a negative count.
pub fn completed_years(from: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - from.year();
    if (today.month(), today.day()) < (from.month(), from.day()) {
        years - 1
    } else {
        years
    }
}

/// Round to two decimals (cents).
///
/// Rounds the exact binary value of `value`, ties to even, the same way
/// decimal formatting does: `2.675` is stored just below the tie and becomes
/// `2.67`, and the exact tie `0.125` becomes `0.12`.
pub fn round_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
