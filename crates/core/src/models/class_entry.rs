use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time::hhmm;

/// Day of the week a class repeats on.
///
/// Variants are declared Sunday-first so that the discriminant matches the
/// day index used by browser clocks, and `Ord` sorts days in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_sunday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWeekdayError(pub String);

impl fmt::Display for ParseWeekdayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown weekday: {}", self.0)
    }
}

impl std::error::Error for ParseWeekdayError {}

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseWeekdayError(s.to_string()))
    }
}

/// A weekly class as stored and rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub id: Uuid,
    pub day: Weekday,
    pub subject: String,
    /// "Block, Room"
    pub venue: String,
    pub slot: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

/// Builds the composite venue string from its two form fields.
pub fn compose_venue(block: &str, room: &str) -> String {
    format!("{}, {}", block.trim(), room.trim())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTimes {
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

/// Adds the same class on every selected day, each with its own times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClassesRequest {
    pub subject: String,
    pub block: String,
    pub room: String,
    pub slot: String,
    #[serde(default)]
    pub days: BTreeMap<Weekday, DayTimes>,
}

impl CreateClassesRequest {
    /// One entry per selected day, in week order, with fresh ids.
    pub fn into_entries(self) -> Vec<ClassEntry> {
        let venue = compose_venue(&self.block, &self.room);
        self.days
            .into_iter()
            .map(|(day, times)| ClassEntry {
                id: Uuid::new_v4(),
                day,
                subject: self.subject.trim().to_string(),
                venue: venue.clone(),
                slot: self.slot.trim().to_string(),
                start_time: times.start_time,
                end_time: times.end_time,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClassesResponse {
    pub created: Vec<ClassEntry>,
}

/// Full replacement of an entry's editable fields. The day is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateClassRequest {
    pub subject: String,
    pub block: String,
    pub room: String,
    pub slot: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

impl UpdateClassRequest {
    pub fn apply_to(&self, existing: &ClassEntry) -> ClassEntry {
        ClassEntry {
            id: existing.id,
            day: existing.day,
            subject: self.subject.trim().to_string(),
            venue: compose_venue(&self.block, &self.room),
            slot: self.slot.trim().to_string(),
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTimetableResponse {
    pub days: BTreeMap<Weekday, Vec<ClassEntry>>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearTimetableResponse {
    pub removed: u64,
}
