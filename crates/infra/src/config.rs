use chrono::NaiveDate;
use recurring_calendar_domain::{default_generation_ceiling, parse_date};
use tracing::{info, warn};

const GENERATION_CEILING_ENV: &str = "RECURRENCE_CEILING";

#[derive(Debug, Clone)]
pub struct Config {
    /// Last date occurrences of recurring events are generated for.
    /// A series without an end date, or with an end date after this one,
    /// is cut here. Never later than `default_generation_ceiling`.
    pub generation_ceiling: NaiveDate,
}

impl Config {
    pub fn new() -> Self {
        let ceiling = std::env::var(GENERATION_CEILING_ENV).ok();
        Self {
            generation_ceiling: parse_generation_ceiling(ceiling),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_generation_ceiling(value: Option<String>) -> NaiveDate {
    let default_ceiling = default_generation_ceiling();
    match value {
        Some(ceiling) => match parse_date(&ceiling) {
            Ok(date) if date > default_ceiling => {
                warn!(
                    "The given {}: {} is after the hard ceiling, using the hard ceiling: {}.",
                    GENERATION_CEILING_ENV, ceiling, default_ceiling
                );
                default_ceiling
            }
            Ok(date) => date,
            Err(_) => {
                warn!(
                    "The given {}: {} is not a valid date, falling back to the default ceiling: {}.",
                    GENERATION_CEILING_ENV, ceiling, default_ceiling
                );
                default_ceiling
            }
        },
        None => {
            info!(
                "Did not find {} environment variable. Using the default ceiling: {}.",
                GENERATION_CEILING_ENV, default_ceiling
            );
            default_ceiling
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn uses_given_ceiling() {
        assert_eq!(
            parse_generation_ceiling(Some("2025-06-30".into())),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
        );
    }

    #[test]
    fn clamps_later_ceiling_to_the_hard_ceiling() {
        assert_eq!(
            parse_generation_ceiling(Some("2026-06-30".into())),
            default_generation_ceiling()
        );
        assert_eq!(
            parse_generation_ceiling(Some("2025-12-31".into())),
            default_generation_ceiling()
        );
    }

    #[test]
    fn falls_back_to_default_ceiling() {
        assert_eq!(parse_generation_ceiling(None), default_generation_ceiling());
        assert_eq!(
            parse_generation_ceiling(Some("2026-02-30".into())),
            default_generation_ceiling()
        );
    }
}
