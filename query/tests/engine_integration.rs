//! End-to-end query scenarios over realistic event snapshots.

#![allow(clippy::unwrap_used)]

use chrono::{Duration, TimeZone, Utc};
use evently_core::{Category, Money};
use evently_query::{DateRange, EventFilter, EventQueryEngine, PriceBand};
use evently_testing::EventBuilder;

#[test]
fn search_matches_name_description_and_location() {
    let engine = EventQueryEngine::new();
    let now = Utc::now();

    let events = vec![
        EventBuilder::new()
            .name("Summer Music Festival")
            .description("Three days of live acts")
            .days_out(10)
            .build(),
        EventBuilder::new()
            .name("Open Air Cinema")
            .description("Classic films with live music accompaniment")
            .days_out(5)
            .build(),
        EventBuilder::new()
            .name("Tech Conference 2025")
            .description("Two days of talks")
            .location("Moscone Center, San Francisco")
            .days_out(3)
            .build(),
    ];

    let filter = EventFilter {
        search: Some("music".to_string()),
        ..EventFilter::default()
    };
    let page = engine.query(&events, &filter, 1, now).unwrap();

    let names: Vec<&str> = page.events.iter().map(|e| e.name.as_str()).collect();
    // Date ascending: the description match at 5 days precedes the name
    // match at 10 days
    assert_eq!(names, ["Open Air Cinema", "Summer Music Festival"]);

    // Location text is searchable too
    let by_city = EventFilter {
        search: Some("san francisco".to_string()),
        ..EventFilter::default()
    };
    let page = engine.query(&events, &by_city, 1, now).unwrap();
    assert_eq!(page.events.len(), 1);
    assert_eq!(page.events[0].name, "Tech Conference 2025");
}

#[test]
fn free_band_selects_only_zero_minimum_events() {
    let engine = EventQueryEngine::new();
    let now = Utc::now();

    let events = vec![
        EventBuilder::new()
            .name("Community Picnic")
            .prices(Money::ZERO, Money::ZERO)
            .build(),
        EventBuilder::new()
            .name("Gallery Night")
            .prices(Money::ZERO, Money::from_dollars(15))
            .build(),
        EventBuilder::new()
            .name("Wine Tasting")
            .prices(Money::from_dollars(10), Money::from_dollars(40))
            .build(),
    ];

    let filter = EventFilter {
        price_range: PriceBand::Free,
        ..EventFilter::default()
    };
    let page = engine.query(&events, &filter, 1, now).unwrap();

    assert_eq!(page.events.len(), 2);
    assert!(page.events.iter().all(|e| e.price_min.is_zero()));
}

#[test]
fn category_codes_map_to_categories_and_unknown_codes_pass_everything() {
    let engine = EventQueryEngine::new();
    let now = Utc::now();

    let events = vec![
        EventBuilder::new().category(Category::ArtCulture).build(),
        EventBuilder::new().category(Category::FoodDrink).build(),
    ];

    let art = EventFilter {
        category: Some("art".to_string()),
        ..EventFilter::default()
    };
    let page = engine.query(&events, &art, 1, now).unwrap();
    assert_eq!(page.events.len(), 1);
    assert_eq!(page.events[0].category, Category::ArtCulture);

    let unmapped = EventFilter {
        category: Some("all".to_string()),
        ..EventFilter::default()
    };
    let page = engine.query(&events, &unmapped, 1, now).unwrap();
    assert_eq!(page.events.len(), 2);
}

#[test]
fn today_tomorrow_and_weekend_buckets_select_the_right_days() {
    let engine = EventQueryEngine::new();
    // Wednesday; the upcoming weekend is Jun 14-16
    let now = Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap();
    let on = |d: u32, h: u32| Utc.with_ymd_and_hms(2024, 6, d, h, 0, 0).unwrap();

    let events = vec![
        EventBuilder::new().name("Tonight").date(on(12, 20)).build(),
        EventBuilder::new().name("Tomorrow Matinee").date(on(13, 14)).build(),
        EventBuilder::new().name("Friday Opening").date(on(14, 19)).build(),
        EventBuilder::new().name("Sunday Brunch").date(on(16, 11)).build(),
        EventBuilder::new().name("Monday Talk").date(on(17, 18)).build(),
    ];

    let query_bucket = |bucket: DateRange| {
        let filter = EventFilter {
            date_range: bucket,
            ..EventFilter::default()
        };
        let page = engine.query(&events, &filter, 1, now).unwrap();
        page.events.iter().map(|e| e.name.clone()).collect::<Vec<_>>()
    };

    assert_eq!(query_bucket(DateRange::Today), ["Tonight"]);
    assert_eq!(query_bucket(DateRange::Tomorrow), ["Tomorrow Matinee"]);
    assert_eq!(
        query_bucket(DateRange::Weekend),
        ["Friday Opening", "Sunday Brunch"]
    );
}

#[test]
fn week_bucket_keeps_the_next_seven_days_and_drops_the_past() {
    let engine = EventQueryEngine::new();
    let now = Utc::now();

    let events = vec![
        EventBuilder::new().name("Yesterday").days_out(-1).build(),
        EventBuilder::new().name("In Three Days").days_out(3).build(),
        EventBuilder::new().name("Next Month").days_out(20).build(),
    ];

    let filter = EventFilter {
        date_range: DateRange::Week,
        ..EventFilter::default()
    };
    let page = engine.query(&events, &filter, 1, now).unwrap();

    assert_eq!(page.events.len(), 1);
    assert_eq!(page.events[0].name, "In Three Days");
}

#[test]
fn totals_are_page_independent() {
    let engine = EventQueryEngine::new();
    let now = Utc::now();
    let events: Vec<_> = (1..=21)
        .map(|i| EventBuilder::new().days_out(i).build())
        .collect();

    let filter = EventFilter::default();
    let first = engine.query(&events, &filter, 1, now).unwrap();
    let third = engine.query(&events, &filter, 3, now).unwrap();

    assert_eq!(first.pagination.total_items, 21);
    assert_eq!(third.pagination.total_items, 21);
    assert_eq!(first.pagination.total_pages, 3);
    assert_eq!(third.pagination.total_pages, 3);
    assert_eq!(first.events.len(), 9);
    assert_eq!(third.events.len(), 3);
}

#[test]
fn equal_dates_keep_snapshot_order() {
    let engine = EventQueryEngine::new();
    let now = Utc::now();
    let date = now + Duration::days(4);

    let events = vec![
        EventBuilder::new().name("First").date(date).build(),
        EventBuilder::new().name("Second").date(date).build(),
        EventBuilder::new().name("Third").date(date).build(),
    ];

    let page = engine
        .query(&events, &EventFilter::default(), 1, now)
        .unwrap();
    let names: Vec<&str> = page.events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["First", "Second", "Third"]);
}
