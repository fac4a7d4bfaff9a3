use chrono::NaiveTime;

use crate::{
    format::format_time,
    models::{
        class_entry::Weekday,
        settings::AppSettings,
        time::time_from_minutes,
        view::{DailyClass, DailyView, FreeSlot},
    },
    palette::slot_color,
    timetable::Timetable,
};

use super::free_time::free_intervals_for;

/// Builds the "today" screen for `day` as seen at `now`.
///
/// A class counts as completed once its end time has been reached.
pub fn daily_view(
    timetable: &Timetable,
    day: Weekday,
    now: NaiveTime,
    settings: &AppSettings,
) -> DailyView {
    let format = settings.time_format;
    let entries = timetable.day(day);

    let classes: Vec<DailyClass> = entries
        .iter()
        .map(|entry| DailyClass {
            completed: entry.end_time <= now,
            color: slot_color(&entry.slot),
            start_label: format_time(entry.start_time, format),
            end_label: format_time(entry.end_time, format),
            entry: entry.clone(),
        })
        .collect();

    let completed_count = classes.iter().filter(|class| class.completed).count();
    let all_completed = !classes.is_empty() && completed_count == classes.len();

    let free_slots = free_intervals_for(entries)
        .into_iter()
        .filter_map(|interval| {
            let start = time_from_minutes(interval.start)?;
            let end = time_from_minutes(interval.end)?;
            Some(FreeSlot {
                start,
                end,
                duration_minutes: interval.duration(),
                start_label: format_time(start, format),
                end_label: format_time(end, format),
            })
        })
        .collect();

    DailyView {
        day,
        now,
        time_format: format,
        classes,
        completed_count,
        all_completed,
        free_slots,
    }
}
