use chrono::NaiveDate;
use recurring_calendar_api::{execute, ApiError, GetEventsUseCase};
use recurring_calendar_domain::{CalendarEvent, RepeatInfo};
use recurring_calendar_infra::{setup_context, Context};

pub struct TestApp {
    pub ctx: Context,
}

impl TestApp {
    pub async fn events(&self) -> Vec<CalendarEvent> {
        execute(GetEventsUseCase, &self.ctx)
            .await
            .map_err(ApiError::from)
            .expect("To get events")
    }

    pub async fn events_titled(&self, title: &str) -> Vec<CalendarEvent> {
        self.events()
            .await
            .into_iter()
            .filter(|e| e.title == title)
            .collect()
    }
}

pub fn spawn_app() -> TestApp {
    TestApp {
        ctx: setup_context(),
    }
}

pub fn new_event(title: &str, date: NaiveDate, repeat: RepeatInfo) -> CalendarEvent {
    CalendarEvent {
        id: Default::default(),
        series_id: None,
        title: title.into(),
        date,
        start_time: "10:00".into(),
        end_time: "11:00".into(),
        description: Default::default(),
        location: "Room".into(),
        category: "Work".into(),
        repeat,
        notification_time: 10,
    }
}
