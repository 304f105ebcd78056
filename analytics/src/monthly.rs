//! Monthly revenue time series.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use evently_core::{Money, Ticket};
use serde::Serialize;

use crate::error::AnalyticsError;

/// Revenue for one calendar month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonthlyStat {
    /// Month label, e.g. `"Jun 2024"`
    pub month: String,
    /// Revenue from tickets purchased in that month (within the lookback)
    pub revenue: Money,
}

/// First day of the month `date` falls in.
fn month_start(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
}

/// Bucket ticket revenue by calendar month over a trailing lookback window.
///
/// The series is dense: every calendar month the window `[now - days, now]`
/// touches gets an entry, zero revenue included, ordered chronologically.
pub(crate) fn compute(
    tickets: &[Ticket],
    days: u32,
    now: DateTime<Utc>,
) -> Result<Vec<MonthlyStat>, AnalyticsError> {
    if days == 0 {
        return Err(AnalyticsError::InvalidLookback { days });
    }

    let start = now - Duration::days(i64::from(days));
    let (Some(mut cursor), Some(last)) = (
        month_start(start.date_naive()),
        month_start(now.date_naive()),
    ) else {
        return Ok(Vec::new());
    };

    let in_window =
        |at: DateTime<Utc>| at >= start && at <= now;

    let mut series = Vec::new();
    while cursor <= last {
        let revenue = Money::sum(
            tickets
                .iter()
                .filter(|t| in_window(t.purchased_at))
                .filter(|t| month_start(t.purchased_at.date_naive()) == Some(cursor))
                .map(|t| t.price),
        );
        series.push(MonthlyStat {
            month: cursor.format("%b %Y").to_string(),
            revenue,
        });
        match cursor.checked_add_months(Months::new(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    Ok(series)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_month_start() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 17).unwrap();
        assert_eq!(
            month_start(date),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
    }

    #[test]
    fn test_zero_lookback_rejected() {
        let result = compute(&[], 0, Utc::now());
        assert_eq!(result, Err(AnalyticsError::InvalidLookback { days: 0 }));
    }
}
