//! Calendar math for date-range buckets.
//!
//! All helpers operate on whole calendar days ([`NaiveDate`]); the engine
//! truncates "now" to a day before resolving buckets. Helpers return `None`
//! when the chrono arithmetic would leave the representable date range,
//! which filters treat as an unmatchable (or unbounded, for the month
//! upper end) window.

use chrono::{Datelike, Days, Months, NaiveDate};

/// The calendar day after `today`.
#[must_use]
pub fn tomorrow(today: NaiveDate) -> Option<NaiveDate> {
    today.succ_opt()
}

/// The upcoming weekend as `(friday, sunday)`, both inclusive.
///
/// On a Friday the window starts today; on a Saturday or Sunday it rolls
/// forward to the next week's Friday.
#[must_use]
pub fn weekend_window(today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    // Days until the next Friday, with Friday itself counting as zero
    let days_until_friday = (7 - today.weekday().num_days_from_sunday() + 5) % 7;
    let friday = today.checked_add_days(Days::new(u64::from(days_until_friday)))?;
    let sunday = friday.checked_add_days(Days::new(2))?;
    Some((friday, sunday))
}

/// Last day of the "this week" bucket: seven days out.
#[must_use]
pub fn week_end(today: NaiveDate) -> Option<NaiveDate> {
    today.checked_add_days(Days::new(7))
}

/// Last day of the "this month" bucket: one calendar month out.
#[must_use]
pub fn month_end(today: NaiveDate) -> Option<NaiveDate> {
    today.checked_add_months(Months::new(1))
}
