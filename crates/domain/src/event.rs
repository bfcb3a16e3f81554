use crate::shared::{
    entity::{Entity, ID},
    recurrence::{next_occurrence_date, RepeatInfo, RepeatType},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A calendar entry on a single date.
///
/// Either a standalone event or one materialized occurrence of a
/// recurring series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: ID,
    /// Base id of the series this occurrence was generated from.
    /// Records created before this field existed are grouped by parsing
    /// their `id` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_id: Option<ID>,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub repeat: RepeatInfo,
    /// Minutes before the start at which the owner is notified
    pub notification_time: i64,
}

/// Fields of a `CalendarEvent` to overwrite. Absent fields are left as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub notification_time: Option<i64>,
}

impl Entity for CalendarEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl CalendarEvent {
    pub fn is_recurring(&self) -> bool {
        self.repeat.is_recurring()
    }

    /// Identity of the group this event is edited and deleted with when a
    /// change applies to the whole series. A non-recurring event is a group
    /// of its own.
    pub fn series_key(&self) -> ID {
        match &self.series_id {
            Some(series_id) => series_id.clone(),
            None if self.is_recurring() => self.id.base_id(),
            None => self.id.clone(),
        }
    }

    /// Materializes every occurrence of this event on or before the earlier
    /// of its repeat end date and `ceiling`, in date order.
    pub fn expand(&self, ceiling: NaiveDate) -> Vec<CalendarEvent> {
        if !self.is_recurring() {
            return vec![self.clone()];
        }
        if self.repeat.interval < 1 {
            warn!(
                "Event {} repeats with interval {}, only the first occurrence is generated",
                self.id, self.repeat.interval
            );
        }
        if self.repeat.repeat_type == RepeatType::Unsupported {
            warn!(
                "Event {} has an unsupported repeat type, only the first occurrence is generated",
                self.id
            );
        }

        let start = self.date;
        let end = self.repeat.effective_end_date(ceiling);

        let mut occurrences = Vec::new();
        let mut date = if start <= end { Some(start) } else { None };
        while let Some(current) = date {
            occurrences.push(self.occurrence_on(current));
            date = next_occurrence_date(current, start, &self.repeat, end);
        }
        occurrences
    }

    fn occurrence_on(&self, date: NaiveDate) -> CalendarEvent {
        CalendarEvent {
            id: ID::occurrence(&self.id, &date),
            series_id: Some(self.id.clone()),
            date,
            ..self.clone()
        }
    }

    pub fn apply_patch(&mut self, patch: &CalendarEventPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(start_time) = &patch.start_time {
            self.start_time = start_time.clone();
        }
        if let Some(end_time) = &patch.end_time {
            self.end_time = end_time.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(location) = &patch.location {
            self.location = location.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(notification_time) = patch.notification_time {
            self.notification_time = notification_time;
        }
    }

    /// Turns an occurrence into a standalone event
    pub fn detach_from_series(&mut self) {
        self.repeat = RepeatInfo::none();
        self.series_id = None;
    }
}
