//! End-to-end walkthrough: seed a repository, browse events, read analytics.

use chrono::{Duration, Utc};
use evently_analytics::{AnalyticsAggregator, CategoryView};
use evently_core::{assemble_views, Category, Money, NewEvent, TicketType, UserId};
use evently_query::{EventFilter, EventQueryEngine, PriceBand};
use evently_storage::{InMemoryRepository, Repository};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticketing_demo=info,evently_query=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let now = Utc::now();
    let mut repo = InMemoryRepository::new();
    let organizer = UserId::new();
    let visitor = UserId::new();

    // Seed a handful of events across categories and price points
    let seeds = [
        ("Summer Music Festival", Category::Music, 25u64, 100u64, 14),
        ("Tech Conference 2025", Category::Technology, 100, 300, 30),
        ("Gallery Night", Category::ArtCulture, 0, 15, 3),
        ("City Marathon", Category::Sports, 10, 40, 45),
        ("Street Food Fair", Category::FoodDrink, 0, 0, 7),
    ];
    let mut event_ids = Vec::new();
    for (name, category, min, max, days_out) in seeds {
        let event = repo.create_event(
            NewEvent {
                name: name.to_string(),
                description: format!("Join us for {name}"),
                date: now + Duration::days(days_out),
                location: "Central Park, New York".to_string(),
                category,
                price_min: Money::from_dollars(min),
                price_max: Money::from_dollars(max),
                capacity: 200,
                creator_id: organizer,
            },
            now,
        )?;
        event_ids.push(event.id);
    }
    info!(events = event_ids.len(), "seeded repository");

    // A visitor favorites the festival and buys tickets to two events
    repo.add_favorite(visitor, event_ids[0], now)?;
    repo.purchase_tickets(visitor, event_ids[0], TicketType::Vip, 2, now)?;
    repo.purchase_tickets(visitor, event_ids[1], TicketType::Standard, 1, now)?;

    // Browse free events
    let engine = EventQueryEngine::new();
    let filter = EventFilter {
        price_range: PriceBand::Free,
        ..EventFilter::default()
    };
    let page = engine.query(&repo.events(), &filter, 1, now)?;
    let views = assemble_views(
        page.events,
        &repo.favorite_event_ids(visitor),
        &repo.attendee_counts(),
    );
    for view in &views {
        info!(
            name = %view.event.name,
            price_range = %view.price_range,
            attendees = view.attendees_count,
            favorite = view.is_favorite,
            "free event"
        );
    }

    // Organizer-side analytics
    let aggregator = AnalyticsAggregator::new();
    let events = repo.events();
    let tickets = repo.tickets();

    let metrics = aggregator.metrics(&events, &tickets, now);
    info!(
        tickets_sold = metrics.tickets_sold,
        revenue = %metrics.revenue,
        active_events = metrics.active_events,
        "metrics snapshot"
    );

    for stat in aggregator.monthly_revenue(&tickets, 90, now)? {
        info!(month = %stat.month, revenue = %stat.revenue, "monthly revenue");
    }

    for stat in aggregator.category_stats(&events, &tickets, CategoryView::Revenue) {
        info!(
            category = %stat.category,
            tickets = stat.ticket_count,
            revenue = %stat.revenue,
            "category"
        );
    }

    for perf in aggregator.event_performance(&events, &tickets, now) {
        info!(
            name = %perf.event.name,
            sold = perf.tickets_sold,
            capacity = perf.capacity,
            fill_rate = perf.fill_rate,
            status = ?perf.status,
            "upcoming event"
        );
    }

    Ok(())
}
