mod telemetry;

use anyhow::Context as _;
use recurring_calendar_api::{execute, ApiError, CreateEventUseCase, GetEventsUseCase};
use recurring_calendar_domain::CalendarEvent;
use recurring_calendar_infra::setup_context;
use serde::Deserialize;
use std::io::Read;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

/// Either a single event or a list of events
#[derive(Deserialize)]
#[serde(untagged)]
enum EventsInput {
    One(CalendarEvent),
    Many(Vec<CalendarEvent>),
}

impl EventsInput {
    fn into_events(self) -> Vec<CalendarEvent> {
        match self {
            Self::One(event) => vec![event],
            Self::Many(events) => events,
        }
    }
}

/// Reads events as JSON from stdin, materializes recurring ones and prints
/// every stored event as JSON.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("recurring_calendar".into(), "info".into());
    init_subscriber(subscriber);

    let ctx = setup_context();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read events from stdin")?;
    let events = serde_json::from_str::<EventsInput>(&input)
        .context("Failed to parse events")?
        .into_events();

    for event in events {
        let occurrences = execute(CreateEventUseCase { event }, &ctx)
            .await
            .map_err(ApiError::from)?;
        info!("Stored {} events", occurrences.len());
    }

    let stored = execute(GetEventsUseCase, &ctx)
        .await
        .map_err(ApiError::from)?;
    println!("{}", serde_json::to_string_pretty(&stored)?);

    Ok(())
}
