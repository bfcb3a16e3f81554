use crate::date::format_date;
use chrono::NaiveDate;
use recurring_calendar_utils::create_random_secret;
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

const ID_SEPARATOR: char = '-';

pub trait Entity {
    fn id(&self) -> &ID;
}

/// Identity of a `CalendarEvent`.
///
/// A base id names a standalone event or the definition of a series.
/// An occurrence id is `<base>-<YYYY-MM-DD>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ID(String);

impl ID {
    pub fn new() -> Self {
        Self(create_random_secret(16))
    }

    /// The id of the occurrence of the series `base` on `date`
    pub fn occurrence(base: &ID, date: &NaiveDate) -> Self {
        Self(format!("{}{}{}", base.0, ID_SEPARATOR, format_date(date)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base id of a series this id looks like an occurrence of, otherwise
    /// the id itself.
    pub fn base_id(&self) -> ID {
        let segments = self.0.split(ID_SEPARATOR).collect::<Vec<_>>();
        if segments.len() >= 4 && !segments[0].is_empty() && has_date_suffix(&segments) {
            Self(segments[0].to_string())
        } else {
            self.clone()
        }
    }
}

fn has_date_suffix(segments: &[&str]) -> bool {
    let suffix = &segments[segments.len() - 3..];
    let is_number_of_len =
        |s: &str, len: usize| s.len() == len && s.chars().all(|c| c.is_ascii_digit());

    is_number_of_len(suffix[0], 4)
        && is_number_of_len(suffix[1], 2)
        && is_number_of_len(suffix[2], 2)
}

impl Default for ID {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum InvalidIDError {
    #[error("ID: {0} is malformed")]
    Malformed(String),
}

impl FromStr for ID {
    type Err = InvalidIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(InvalidIDError::Malformed(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl Serialize for ID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ID {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IDVisitor;

        impl<'de> Visitor<'de> for IDVisitor {
            type Value = ID;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A valid string id representation")
            }

            fn visit_str<E>(self, value: &str) -> Result<ID, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<ID>()
                    .map_err(|_| E::custom(format!("Malformed id: {}", value)))
            }
        }

        deserializer.deserialize_str(IDVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn id(s: &str) -> ID {
        s.parse().unwrap()
    }

    #[test]
    fn builds_occurrence_id_from_base_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(ID::occurrence(&id("1"), &date).as_str(), "1-2024-07-01");
    }

    #[test]
    fn derives_base_id_of_occurrence_ids() {
        assert_eq!(id("1-2024-07-01").base_id(), id("1"));
        assert_eq!(id("abc-2025-12-31").base_id(), id("abc"));
        assert_eq!(id("a-b-2024-07-01").base_id(), id("a"));
    }

    #[test]
    fn base_id_of_non_occurrence_ids_is_the_id_itself() {
        for raw in &["1", "team-meeting", "a-b-c", "1-2024-7-1", "1-24-07-01", "-2024-07-01"] {
            assert_eq!(id(raw).base_id(), id(raw));
        }
    }

    #[test]
    fn generated_ids_never_look_like_occurrences() {
        let new_id = ID::new();
        assert!(!new_id.as_str().contains(ID_SEPARATOR));
        assert_eq!(new_id.base_id(), new_id);
    }

    #[test]
    fn rejects_empty_ids() {
        assert!("".parse::<ID>().is_err());
        assert!("  ".parse::<ID>().is_err());
        assert!(serde_json::from_str::<ID>("\"\"").is_err());
        assert_eq!(serde_json::from_str::<ID>("\"7\"").unwrap(), id("7"));
    }
}
