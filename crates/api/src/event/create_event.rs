use crate::{error::ApiError, shared::usecase::UseCase};
use recurring_calendar_domain::{generate_recurring_events_until, CalendarEvent};
use recurring_calendar_infra::Context;

/// Stores a new event. A recurring event is stored as the list of its
/// materialized occurrences.
#[derive(Debug)]
pub struct CreateEventUseCase {
    pub event: CalendarEvent,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidRecurrenceRule,
    EmptySeries,
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidRecurrenceRule => {
                Self::BadClientData("Invalid recurrence rule specified for the event".into())
            }
            UseCaseError::EmptySeries => Self::BadClientData(
                "The recurring event has no occurrence before its end date".into(),
            ),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = Vec<CalendarEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if !self.event.repeat.is_valid() {
            return Err(UseCaseError::InvalidRecurrenceRule);
        }

        let occurrences =
            generate_recurring_events_until(&self.event, ctx.config.generation_ceiling);
        if occurrences.is_empty() {
            return Err(UseCaseError::EmptySeries);
        }

        ctx.repos
            .events
            .insert_many(&occurrences)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(occurrences)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::test_helpers::{daily_event, date, single_event};
    use recurring_calendar_infra::setup_context;

    #[tokio::test]
    async fn creates_event_without_recurrence() {
        let ctx = setup_context();
        let event = single_event("1");
        let mut usecase = CreateEventUseCase {
            event: event.clone(),
        };

        let res = usecase.execute(&ctx).await;

        assert_eq!(res, Ok(vec![event.clone()]));
        assert_eq!(ctx.repos.events.find_all().await.unwrap(), vec![event]);
    }

    #[tokio::test]
    async fn creates_every_occurrence_of_recurring_event() {
        let ctx = setup_context();
        let mut usecase = CreateEventUseCase {
            event: daily_event("1", date(2024, 7, 3)),
        };

        let res = usecase.execute(&ctx).await.expect("To create events");

        let ids = res.iter().map(|e| e.id.to_string()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["1-2024-07-01", "1-2024-07-02", "1-2024-07-03"]);
        assert_eq!(ctx.repos.events.find_all().await.unwrap(), res);
    }

    #[tokio::test]
    async fn rejects_event_with_invalid_recurrence() {
        let ctx = setup_context();
        let mut event = daily_event("1", date(2024, 7, 3));
        event.repeat.interval = 0;
        let mut usecase = CreateEventUseCase { event };

        let res = usecase.execute(&ctx).await;

        assert_eq!(res, Err(UseCaseError::InvalidRecurrenceRule));
        assert!(ctx.repos.events.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_series_starting_after_the_ceiling() {
        let mut ctx = setup_context();
        ctx.config.generation_ceiling = date(2024, 6, 30);
        let mut usecase = CreateEventUseCase {
            event: daily_event("1", date(2024, 7, 3)),
        };

        let res = usecase.execute(&ctx).await;

        assert_eq!(res, Err(UseCaseError::EmptySeries));
    }
}
