use crate::date::get_month_length;
use chrono::{prelude::*, Days};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Last date any series is expanded to, whatever its own end date says
pub fn default_generation_ceiling() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or(NaiveDate::MAX)
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    /// Any frequency this engine does not know how to expand
    #[serde(other)]
    Unsupported,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type")]
    pub repeat_type: RepeatType,
    /// Number of days, weeks, months or years between two occurrences.
    /// Ignored when `repeat_type` is `None`.
    pub interval: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Default for RepeatInfo {
    fn default() -> Self {
        Self::none()
    }
}

impl RepeatInfo {
    pub fn new(repeat_type: RepeatType, interval: i64, end_date: Option<NaiveDate>) -> Self {
        Self {
            repeat_type,
            interval,
            end_date,
        }
    }

    pub fn none() -> Self {
        Self::new(RepeatType::None, 0, None)
    }

    pub fn is_recurring(&self) -> bool {
        self.repeat_type != RepeatType::None
    }

    pub fn is_valid(&self) -> bool {
        !self.is_recurring() || self.interval >= 1
    }

    /// The earlier of `end_date` and `ceiling`
    pub fn effective_end_date(&self, ceiling: NaiveDate) -> NaiveDate {
        match self.end_date {
            Some(end_date) if end_date < ceiling => end_date,
            _ => ceiling,
        }
    }
}

/// Date of the occurrence following `current` in a series that started on
/// `start`, or `None` when no occurrence remains on or before `end`.
///
/// Monthly series keep the day of month of `start` and skip months that are
/// too short for it. Yearly series keep the month and day of `start`, so a
/// series starting on February 29 only lands on leap years.
pub fn next_occurrence_date(
    current: NaiveDate,
    start: NaiveDate,
    repeat: &RepeatInfo,
    end: NaiveDate,
) -> Option<NaiveDate> {
    if repeat.interval < 1 {
        return None;
    }
    let interval = repeat.interval;

    let next = match repeat.repeat_type {
        RepeatType::Daily => current.checked_add_days(Days::new(interval as u64)),
        RepeatType::Weekly => {
            current.checked_add_days(Days::new((interval as u64).checked_mul(7)?))
        }
        RepeatType::Monthly => next_monthly(current, start.day(), interval, end),
        RepeatType::Yearly => next_yearly(current, start.month(), start.day(), interval, end),
        RepeatType::None | RepeatType::Unsupported => None,
    }?;

    if next > end {
        None
    } else {
        Some(next)
    }
}

fn next_monthly(current: NaiveDate, day: u32, interval: i64, end: NaiveDate) -> Option<NaiveDate> {
    let mut months = interval;
    loop {
        let (year, month) = add_months(current.year(), current.month(), months)?;
        if NaiveDate::from_ymd_opt(year, month, 1)? > end {
            return None;
        }
        if let Some(date) = land_on(year, month, day) {
            return Some(date);
        }
        months = months.checked_add(interval)?;
    }
}

fn next_yearly(
    current: NaiveDate,
    month: u32,
    day: u32,
    interval: i64,
    end: NaiveDate,
) -> Option<NaiveDate> {
    let mut years = interval;
    loop {
        let year = i32::try_from(i64::from(current.year()).checked_add(years)?).ok()?;
        if NaiveDate::from_ymd_opt(year, 1, 1)? > end {
            return None;
        }
        if let Some(date) = land_on(year, month, day) {
            return Some(date);
        }
        years = years.checked_add(interval)?;
    }
}

/// `None` when the month is too short for `day`
fn land_on(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if day > get_month_length(year, month) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

// month: January -> 1
fn add_months(year: i32, month: u32, months: i64) -> Option<(i32, u32)> {
    let index = (i64::from(year) * 12 + i64::from(month) - 1).checked_add(months)?;
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
    Some((year, month))
}
