mod date;
mod event;
mod recurring;
mod shared;

pub use date::{format_date, get_month_length, is_leap_year, parse_date, InvalidDateError};
pub use event::{CalendarEvent, CalendarEventPatch};
pub use recurring::{
    delete_recurring_event, generate_recurring_events, generate_recurring_events_until,
    update_recurring_event,
};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::recurrence::{
    default_generation_ceiling, next_occurrence_date, RepeatInfo, RepeatType,
};
