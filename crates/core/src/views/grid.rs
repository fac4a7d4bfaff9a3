//! Weekly grid placement.
//!
//! The week view is a CSS-style grid with one row per day from Monday to
//! Saturday and one column per half hour from 08:00 to 21:00. Row 1 holds
//! the hour headers and column 1 the day labels, so content starts at
//! row 2, column 2.
//!
//! Placement looks only at the entry itself. Entries on Sunday, or that
//! start before 08:00 or end after 21:00, are not placed at all; they are
//! never clipped to fit.

use chrono::NaiveTime;

use crate::models::{
    class_entry::{ClassEntry, Weekday},
    time::minutes_of_day,
    view::GridPosition,
};

pub const GRID_START_HOUR: u32 = 8;
pub const GRID_END_HOUR: u32 = 21;
pub const COLUMN_MINUTES: u32 = 30;

/// Rows of the grid, top to bottom.
pub const VISIBLE_DAYS: [Weekday; 6] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

/// Header row and label column.
const LEADING_TRACKS: u32 = 2;

pub fn hour_count() -> u32 {
    GRID_END_HOUR - GRID_START_HOUR
}

/// Time columns plus the day label column.
pub fn column_count() -> u32 {
    hour_count() * (60 / COLUMN_MINUTES) + 1
}

/// Day rows plus the header row.
pub fn row_count() -> u32 {
    VISIBLE_DAYS.len() as u32 + 1
}

pub fn row_of(day: Weekday) -> Option<u32> {
    VISIBLE_DAYS
        .iter()
        .position(|visible| *visible == day)
        .map(|index| index as u32 + LEADING_TRACKS)
}

/// Grid cell for a class on `day` from `start` to `end`, if it is visible.
pub fn place(day: Weekday, start: NaiveTime, end: NaiveTime) -> Option<GridPosition> {
    let row = row_of(day)?;

    let start = minutes_of_day(start);
    let end = minutes_of_day(end);
    let window_start = GRID_START_HOUR * 60;
    let window_end = GRID_END_HOUR * 60;
    if start < window_start || end > window_end {
        return None;
    }

    let offset = start - window_start;
    let duration = end.saturating_sub(start);
    // Half a column rounds up.
    let span = (duration + COLUMN_MINUTES / 2) / COLUMN_MINUTES;

    Some(GridPosition {
        row,
        column_start: offset / COLUMN_MINUTES + LEADING_TRACKS,
        column_span: span.max(1),
    })
}

pub fn place_entry(entry: &ClassEntry) -> Option<GridPosition> {
    place(entry.day, entry.start_time, entry.end_time)
}
