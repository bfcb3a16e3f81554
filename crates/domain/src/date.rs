use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InvalidDateError {
    #[error("Malformed date: {0}")]
    Malformed(String),
}

/// Parses a `YYYY-MM-DD` calendar date. Month and day may omit the leading zero.
pub fn parse_date(datestr: &str) -> Result<NaiveDate, InvalidDateError> {
    let malformed = || InvalidDateError::Malformed(datestr.to_string());

    let dates = datestr.split('-').collect::<Vec<_>>();
    if dates.len() != 3 {
        return Err(malformed());
    }
    let year = dates[0].parse::<i32>().map_err(|_| malformed())?;
    let month = dates[1].parse::<u32>().map_err(|_| malformed())?;
    let day = dates[2].parse::<u32>().map_err(|_| malformed())?;

    if !(1970..=2100).contains(&year) || !(1..=12).contains(&month) {
        return Err(malformed());
    }
    if day < 1 || day > get_month_length(year, month) {
        return Err(malformed());
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn get_month_length(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Formats as `YYYY-MM-DD`, which is also the suffix of occurrence ids
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
