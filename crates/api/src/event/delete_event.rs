use crate::{error::ApiError, shared::usecase::UseCase};
use recurring_calendar_domain::{delete_recurring_event, CalendarEvent, ID};
use recurring_calendar_infra::Context;
use std::collections::HashSet;

/// Deletes one occurrence, or its whole series when `is_single_delete` is false.
/// Responds with the deleted events.
#[derive(Debug)]
pub struct DeleteEventUseCase {
    pub event_id: ID,
    pub is_single_delete: bool,
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
impl UseCase for DeleteEventUseCase {
    type Response = Vec<CalendarEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEvent";

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

        let remaining_events =
            delete_recurring_event(&events, &self.event_id, self.is_single_delete);
        let remaining_ids = remaining_events
            .iter()
            .map(|e| &e.id)
            .collect::<HashSet<_>>();
        let deleted_ids = events
            .iter()
            .filter(|e| !remaining_ids.contains(&e.id))
            .map(|e| e.id.clone())
            .collect::<Vec<_>>();

        ctx.repos
            .events
            .delete_many(&deleted_ids)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::test_helpers::{daily_event, date, single_event};
    use recurring_calendar_domain::generate_recurring_events;
    use recurring_calendar_infra::setup_context;

    async fn setup() -> Context {
        let ctx = setup_context();
        let mut events = generate_recurring_events(&daily_event("1", date(2024, 7, 3)));
        events.push(single_event("2"));
        ctx.repos.events.insert_many(&events).await.unwrap();
        ctx
    }

    fn stored_ids(events: &[CalendarEvent]) -> Vec<String> {
        events.iter().map(|e| e.id.to_string()).collect()
    }

    #[tokio::test]
    async fn delete_nonexisting_event() {
        let ctx = setup().await;
        let mut usecase = DeleteEventUseCase {
            event_id: "3".parse().unwrap(),
            is_single_delete: false,
        };

        let res = usecase.execute(&ctx).await;

        assert_eq!(res, Err(UseCaseError::NotFound(usecase.event_id.clone())));
        assert_eq!(ctx.repos.events.find_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn single_delete_removes_one_occurrence() {
        let ctx = setup().await;
        let mut usecase = DeleteEventUseCase {
            event_id: "1-2024-07-02".parse().unwrap(),
            is_single_delete: true,
        };

        let deleted = usecase.execute(&ctx).await.expect("To delete event");

        assert_eq!(stored_ids(&deleted), vec!["1-2024-07-02"]);
        assert_eq!(
            stored_ids(&ctx.repos.events.find_all().await.unwrap()),
            vec!["1-2024-07-01", "1-2024-07-03", "2"]
        );
    }

    #[tokio::test]
    async fn series_delete_removes_every_occurrence() {
        let ctx = setup().await;
        let mut usecase = DeleteEventUseCase {
            event_id: "1-2024-07-01".parse().unwrap(),
            is_single_delete: false,
        };

        let deleted = usecase.execute(&ctx).await.expect("To delete events");

        assert_eq!(deleted.len(), 3);
        assert_eq!(
            stored_ids(&ctx.repos.events.find_all().await.unwrap()),
            vec!["2"]
        );
    }
}
