use crate::{error::ApiError, shared::usecase::UseCase};
use recurring_calendar_domain::{update_recurring_event, CalendarEvent, CalendarEventPatch, ID};
use recurring_calendar_infra::Context;

/// Edits one occurrence, or its whole series when `is_single_update` is false.
/// Responds with the events that changed.
#[derive(Debug)]
pub struct UpdateEventUseCase {
    pub event_id: ID,
    pub patch: CalendarEventPatch,
    pub is_single_update: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => Self::NotFound(format!(
                "The calendar event with id: {}, was not found.",
                event_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEventUseCase {
    type Response = Vec<CalendarEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEvent";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let events = ctx
            .repos
            .events
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        if !events.iter().any(|e| e.id == self.event_id) {
            return Err(UseCaseError::NotFound(self.event_id.clone()));
        }

        let updated_events = update_recurring_event(
            &events,
            &self.event_id,
            &self.patch,
            self.is_single_update,
        );
        // Order and length are kept by the update
        let changed_events = updated_events
            .into_iter()
            .zip(events.iter())
            .filter(|(updated, original)| updated != *original)
            .map(|(updated, _)| updated)
            .collect::<Vec<_>>();

        ctx.repos
            .events
            .save_many(&changed_events)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(changed_events)
    }
}
