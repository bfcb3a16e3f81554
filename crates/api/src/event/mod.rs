pub mod create_event;
pub mod delete_event;
pub mod get_event;
pub mod update_event;

#[cfg(test)]
pub(crate) mod test_helpers {
    use chrono::NaiveDate;
    use recurring_calendar_domain::{CalendarEvent, RepeatInfo, RepeatType};

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn daily_event(id: &str, end_date: NaiveDate) -> CalendarEvent {
        CalendarEvent {
            id: id.parse().unwrap(),
            series_id: None,
            title: "Daily meeting".into(),
            date: date(2024, 7, 1),
            start_time: "10:00".into(),
            end_time: "11:00".into(),
            description: "Repeats daily".into(),
            location: "Room".into(),
            category: "Work".into(),
            repeat: RepeatInfo::new(RepeatType::Daily, 1, Some(end_date)),
            notification_time: 10,
        }
    }

    pub fn single_event(id: &str) -> CalendarEvent {
        CalendarEvent {
            title: "Lunch".into(),
            repeat: RepeatInfo::none(),
            ..daily_event(id, date(2024, 7, 1))
        }
    }
}
