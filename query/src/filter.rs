//! Filter specification for event queries.
//!
//! Filter codes arrive as free-form strings from query parameters. Parsing
//! is permissive: an unknown date-range or price-band code deserializes to
//! the unconstrained variant instead of failing, matching the engine's
//! treat-unknown-as-no-constraint policy.

use chrono::NaiveDate;
use evently_core::{Event, Money};
use serde::{Deserialize, Deserializer};

use crate::dates;

/// Named date-range bucket, resolved against "now" truncated to the day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateRange {
    /// No date constraint
    #[default]
    All,
    /// The current calendar day
    Today,
    /// The next calendar day
    Tomorrow,
    /// The next Friday through the following Sunday, inclusive
    Weekend,
    /// Today through seven days out
    Week,
    /// Today through one calendar month out
    Month,
}

impl DateRange {
    /// Parse a filter code; unrecognized codes (and `"all"`) mean no
    /// constraint.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "today" => Self::Today,
            "tomorrow" => Self::Tomorrow,
            "weekend" => Self::Weekend,
            "week" => Self::Week,
            "month" => Self::Month,
            _ => Self::All,
        }
    }

    /// Whether a calendar day falls inside this bucket, relative to `today`.
    #[must_use]
    pub fn contains(&self, day: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Today => day == today,
            Self::Tomorrow => dates::tomorrow(today).is_some_and(|t| day == t),
            Self::Weekend => dates::weekend_window(today)
                .is_some_and(|(friday, sunday)| day >= friday && day <= sunday),
            Self::Week => dates::week_end(today).is_some_and(|end| day >= today && day <= end),
            // An unrepresentable month end means no upper bound
            Self::Month => day >= today && dates::month_end(today).is_none_or(|end| day <= end),
        }
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_code(&code))
    }
}

/// Named price band, bucketed against an event's minimum price.
///
/// Bands with two finite ends are inclusive on both; `Over100` is strictly
/// above $100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriceBand {
    /// No price constraint
    #[default]
    All,
    /// Free admission (`price_min == 0`)
    Free,
    /// $1 through $25
    UpTo25,
    /// $25 through $50
    From25To50,
    /// $50 through $100
    From50To100,
    /// Above $100
    Over100,
}

impl PriceBand {
    /// Parse a filter code; unrecognized codes (and `"all"`) mean no
    /// constraint.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "free" => Self::Free,
            "1-25" => Self::UpTo25,
            "25-50" => Self::From25To50,
            "50-100" => Self::From50To100,
            "100+" => Self::Over100,
            _ => Self::All,
        }
    }

    /// Whether a minimum price falls inside this band.
    #[must_use]
    pub const fn matches(&self, price_min: Money) -> bool {
        let cents = price_min.cents();
        match self {
            Self::All => true,
            Self::Free => cents == 0,
            Self::UpTo25 => cents >= 100 && cents <= 2_500,
            Self::From25To50 => cents >= 2_500 && cents <= 5_000,
            Self::From50To100 => cents >= 5_000 && cents <= 10_000,
            Self::Over100 => cents > 10_000,
        }
    }
}

impl<'de> Deserialize<'de> for PriceBand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_code(&code))
    }
}

/// Filter specification for an event query.
///
/// Every field is optional; the default filter matches everything. The
/// struct deserializes directly from API query parameters.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EventFilter {
    /// Case-insensitive substring matched against name, description, or
    /// location (any of the three)
    pub search: Option<String>,
    /// Date-range bucket
    pub date_range: DateRange,
    /// Category filter code (e.g. `"music"`); unmapped codes mean no
    /// constraint
    pub category: Option<String>,
    /// Price band against the event's minimum price
    pub price_range: PriceBand,
    /// Case-insensitive substring matched against the location field
    pub location: Option<String>,
}

impl EventFilter {
    /// Whether an event satisfies every active predicate, with date buckets
    /// resolved against `today`.
    #[must_use]
    pub fn matches(&self, event: &Event, today: NaiveDate) -> bool {
        self.matches_search(event)
            && self.date_range.contains(event.date.date_naive(), today)
            && self.matches_category(event)
            && self.price_range.matches(event.price_min)
            && self.matches_location(event)
    }

    fn matches_search(&self, event: &Event) -> bool {
        let Some(term) = &self.search else {
            return true;
        };
        let term = term.to_lowercase();
        event.name.to_lowercase().contains(&term)
            || event.description.to_lowercase().contains(&term)
            || event.location.to_lowercase().contains(&term)
    }

    fn matches_category(&self, event: &Event) -> bool {
        let Some(code) = &self.category else {
            return true;
        };
        // Unmapped codes (including "all") impose no constraint
        evently_core::Category::from_filter_code(code)
            .is_none_or(|category| event.category == category)
    }

    fn matches_location(&self, event: &Event) -> bool {
        let Some(query) = &self.location else {
            return true;
        };
        event.location.to_lowercase().contains(&query.to_lowercase())
    }
}
