use chrono::{NaiveTime, Timelike};

use crate::models::{settings::TimeFormat, time::TIME_FORMAT};

/// Renders a clock time for display.
///
/// ```
/// use chrono::NaiveTime;
/// use timetable_core::{format::format_time, models::settings::TimeFormat};
///
/// let time = NaiveTime::from_hms_opt(13, 0, 0).unwrap();
/// assert_eq!(format_time(time, TimeFormat::TwentyFourHour), "13:00");
/// assert_eq!(format_time(time, TimeFormat::TwelveHour), "1:00 PM");
/// assert_eq!(format_time(time, TimeFormat::TwelveHourCondensed), "1 PM");
/// ```
pub fn format_time(time: NaiveTime, format: TimeFormat) -> String {
    if format == TimeFormat::TwentyFourHour {
        return time.format(TIME_FORMAT).to_string();
    }

    let suffix = if time.hour() >= 12 { "PM" } else { "AM" };
    let hour = match time.hour() % 12 {
        0 => 12,
        hour => hour,
    };

    if format == TimeFormat::TwelveHourCondensed && time.minute() == 0 {
        format!("{} {}", hour, suffix)
    } else {
        format!("{}:{:02} {}", hour, time.minute(), suffix)
    }
}
