mod inmemory;

pub use inmemory::InMemoryEventRepo;
use recurring_calendar_domain::{CalendarEvent, ID};

/// Storage of materialized `CalendarEvent`s
#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert_many(&self, events: &[CalendarEvent]) -> anyhow::Result<()>;
    /// Overwrites the stored events with the same ids
    async fn save_many(&self, events: &[CalendarEvent]) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<CalendarEvent>;
    /// Every stored event in insertion order
    async fn find_all(&self) -> anyhow::Result<Vec<CalendarEvent>>;
    /// Returns the events that were deleted
    async fn delete_many(&self, event_ids: &[ID]) -> anyhow::Result<Vec<CalendarEvent>>;
}
