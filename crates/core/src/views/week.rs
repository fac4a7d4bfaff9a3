use crate::{
    format::format_time,
    models::{
        settings::{AppSettings, TimeFormat},
        time::time_from_minutes,
        view::{HourLabel, WeekPlacement, WeekView},
    },
    palette::slot_color,
    timetable::Timetable,
};

use super::grid::{self, GRID_START_HOUR, VISIBLE_DAYS};

/// Hour headers, each spanning the two half-hour columns of its hour.
pub fn hour_labels() -> Vec<HourLabel> {
    (0..grid::hour_count())
        .filter_map(|index| {
            let time = time_from_minutes((GRID_START_HOUR + index) * 60)?;
            Some(HourLabel {
                column_start: index * 2 + 2,
                column_span: 2,
                label: format_time(time, TimeFormat::TwelveHourCondensed),
            })
        })
        .collect()
}

pub fn week_view(timetable: &Timetable, settings: &AppSettings) -> WeekView {
    let format = settings.time_format;
    let mut placements = Vec::new();
    let mut hidden = Vec::new();

    for entry in timetable.iter() {
        match grid::place_entry(entry) {
            Some(position) => placements.push(WeekPlacement {
                position,
                color: slot_color(&entry.slot),
                start_label: format_time(entry.start_time, format),
                end_label: format_time(entry.end_time, format),
                entry: entry.clone(),
            }),
            None => hidden.push(entry.id),
        }
    }
    placements.sort_by_key(|placement| placement.position);

    WeekView {
        days: VISIBLE_DAYS.to_vec(),
        columns: grid::column_count(),
        rows: grid::row_count(),
        hour_labels: hour_labels(),
        placements,
        hidden,
    }
}
