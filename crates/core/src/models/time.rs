//! Wall-clock helpers shared by the models and the view computations.
//!
//! Class times are minute-granular `NaiveTime` values. On the wire they are
//! plain `"HH:MM"` strings, which is what the [`hhmm`] serde module reads
//! and writes.

use chrono::{NaiveTime, Timelike};

/// Wire format for class times.
pub const TIME_FORMAT: &str = "%H:%M";

/// Minutes elapsed since midnight, ignoring seconds.
pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Inverse of [`minutes_of_day`]. Returns `None` past 23:59.
pub fn time_from_minutes(minutes: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// Parses an `"HH:MM"` string.
pub fn parse_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
}

/// Serde adapter for `NaiveTime` fields stored as `"HH:MM"`.
///
/// ```
/// use chrono::NaiveTime;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Lecture {
///     #[serde(with = "timetable_core::models::time::hhmm")]
///     start: NaiveTime,
/// }
///
/// let json = serde_json::to_string(&Lecture {
///     start: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
/// })
/// .unwrap();
/// assert_eq!(json, r#"{"start":"09:05"}"#);
/// ```
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(serde::de::Error::custom)
    }
}

/// Same as [`hhmm`] for optional fields.
pub mod hhmm_option {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(time) => serializer.collect_str(&time.format(TIME_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|value| super::parse_time(&value).map_err(serde::de::Error::custom))
            .transpose()
    }
}
