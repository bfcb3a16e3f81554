//! Expansion of recurring events and edits that apply either to one
//! occurrence or to the whole series it belongs to.
//!
//! Every function here is pure: the given collection is never mutated and a
//! new one is returned.

use crate::{
    event::{CalendarEvent, CalendarEventPatch},
    shared::{entity::ID, recurrence::default_generation_ceiling},
};
use chrono::NaiveDate;
use tracing::debug;

/// Materializes `base_event` into its occurrences up to the default
/// generation ceiling. A non-recurring event is returned as is.
pub fn generate_recurring_events(base_event: &CalendarEvent) -> Vec<CalendarEvent> {
    generate_recurring_events_until(base_event, default_generation_ceiling())
}

pub fn generate_recurring_events_until(
    base_event: &CalendarEvent,
    ceiling: NaiveDate,
) -> Vec<CalendarEvent> {
    let occurrences = base_event.expand(ceiling);
    debug!(
        "Generated {} occurrences for event {}",
        occurrences.len(),
        base_event.id
    );
    occurrences
}

fn find_series_key(events: &[CalendarEvent], event_id: &ID) -> Option<ID> {
    events
        .iter()
        .find(|event| event.id == *event_id)
        .map(CalendarEvent::series_key)
}

/// Applies `patch` to the event `event_id` only, detaching it from its
/// series, or to every event of its series with `repeat` left untouched.
pub fn update_recurring_event(
    events: &[CalendarEvent],
    event_id: &ID,
    patch: &CalendarEventPatch,
    is_single_update: bool,
) -> Vec<CalendarEvent> {
    let series_key = match find_series_key(events, event_id) {
        Some(key) => key,
        None => return events.to_vec(),
    };

    events
        .iter()
        .cloned()
        .map(|mut event| {
            if is_single_update {
                if event.id == *event_id {
                    event.apply_patch(patch);
                    event.detach_from_series();
                }
            } else if event.series_key() == series_key {
                event.apply_patch(patch);
            }
            event
        })
        .collect()
}

/// Removes the event `event_id` only, or every event of its series.
pub fn delete_recurring_event(
    events: &[CalendarEvent],
    event_id: &ID,
    is_single_delete: bool,
) -> Vec<CalendarEvent> {
    let series_key = match find_series_key(events, event_id) {
        Some(key) => key,
        None => return events.to_vec(),
    };

    events
        .iter()
        .filter(|event| {
            if is_single_delete {
                event.id != *event_id
            } else {
                event.series_key() != series_key
            }
        })
        .cloned()
        .collect()
}
