use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use recurring_calendar_domain::{CalendarEvent, ID};

pub struct InMemoryEventRepo {
    calendar_events: std::sync::Mutex<Vec<CalendarEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            calendar_events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert_many(&self, events: &[CalendarEvent]) -> anyhow::Result<()> {
        insert_many(events, &self.calendar_events);
        Ok(())
    }

    async fn save_many(&self, events: &[CalendarEvent]) -> anyhow::Result<()> {
        save_many(events, &self.calendar_events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<CalendarEvent> {
        find(event_id, &self.calendar_events)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<CalendarEvent>> {
        Ok(find_all(&self.calendar_events))
    }

    async fn delete_many(&self, event_ids: &[ID]) -> anyhow::Result<Vec<CalendarEvent>> {
        Ok(find_and_delete_by(&self.calendar_events, |event| {
            event_ids.contains(&event.id)
        }))
    }
}
