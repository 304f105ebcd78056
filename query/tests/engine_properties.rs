//! Property tests for the query engine's filtering and pagination laws.

#![allow(clippy::unwrap_used)]

use chrono::Utc;
use evently_core::{Category, Event, Money};
use evently_query::{DateRange, EventFilter, EventQueryEngine, PriceBand};
use evently_testing::EventBuilder;
use proptest::prelude::*;

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn event_strategy() -> impl Strategy<Value = Event> {
    (
        category_strategy(),
        -60i64..120,
        0u64..200,
        prop::sample::select(vec!["New York", "San Francisco", "Austin", "Berlin"]),
    )
        .prop_map(|(category, days_out, min_dollars, city)| {
            EventBuilder::new()
                .category(category)
                .days_out(days_out)
                .prices(
                    Money::from_dollars(min_dollars),
                    Money::from_dollars(min_dollars + 50),
                )
                .location(city)
                .build()
        })
}

fn filter_strategy() -> impl Strategy<Value = EventFilter> {
    (
        prop::option::of(prop::sample::select(vec!["sample", "event", "zzz"])),
        prop::sample::select(vec![
            DateRange::All,
            DateRange::Today,
            DateRange::Tomorrow,
            DateRange::Weekend,
            DateRange::Week,
            DateRange::Month,
        ]),
        prop::option::of(prop::sample::select(vec!["music", "tech", "art", "bogus"])),
        prop::sample::select(vec![
            PriceBand::All,
            PriceBand::Free,
            PriceBand::UpTo25,
            PriceBand::From25To50,
            PriceBand::From50To100,
            PriceBand::Over100,
        ]),
        prop::option::of(prop::sample::select(vec!["york", "berlin"])),
    )
        .prop_map(|(search, date_range, category, price_range, location)| EventFilter {
            search: search.map(str::to_string),
            date_range,
            category: category.map(str::to_string),
            price_range,
            location: location.map(str::to_string),
        })
}

proptest! {
    #[test]
    fn results_are_a_date_ordered_subset_of_the_snapshot(
        events in prop::collection::vec(event_strategy(), 0..30),
        filter in filter_strategy(),
        page in 1u32..5,
    ) {
        let engine = EventQueryEngine::new();
        let now = Utc::now();
        let result = engine.query(&events, &filter, page, now).unwrap();

        prop_assert!(result.events.len() <= engine.page_size());
        for returned in &result.events {
            prop_assert!(events.iter().any(|e| e.id == returned.id));
            prop_assert!(filter.matches(returned, now.date_naive()));
        }
        for pair in result.events.windows(2) {
            prop_assert!(pair[0].date <= pair[1].date);
        }
    }

    #[test]
    fn pagination_totals_are_consistent(
        events in prop::collection::vec(event_strategy(), 0..40),
        filter in filter_strategy(),
    ) {
        let engine = EventQueryEngine::new();
        let now = Utc::now();

        let first = engine.query(&events, &filter, 1, now).unwrap();
        let expected_pages = first.pagination.total_items.div_ceil(engine.page_size());
        prop_assert_eq!(
            first.pagination.total_pages,
            u32::try_from(expected_pages).unwrap()
        );

        // Totals never depend on which page was requested
        let later = engine.query(&events, &filter, 3, now).unwrap();
        prop_assert_eq!(later.pagination.total_items, first.pagination.total_items);
        prop_assert_eq!(later.pagination.total_pages, first.pagination.total_pages);

        // Walking every page recovers exactly the matching set
        let mut collected = 0;
        for page in 1..=first.pagination.total_pages.max(1) {
            collected += engine.query(&events, &filter, page, now).unwrap().events.len();
        }
        prop_assert_eq!(collected, first.pagination.total_items);
    }

    #[test]
    fn querying_twice_is_idempotent(
        events in prop::collection::vec(event_strategy(), 0..20),
        filter in filter_strategy(),
    ) {
        let engine = EventQueryEngine::new();
        let now = Utc::now();
        let first = engine.query(&events, &filter, 1, now).unwrap();
        let second = engine.query(&events, &filter, 1, now).unwrap();
        prop_assert_eq!(first, second);
    }
}
