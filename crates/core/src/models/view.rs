use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    class_entry::{ClassEntry, Weekday},
    settings::TimeFormat,
    time::hhmm,
};
use crate::palette::SlotColor;

/// Placement of an entry in the weekly grid. Rows and columns are 1-based;
/// row 1 is the hour header and column 1 the day label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: u32,
    pub column_start: u32,
    pub column_span: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    pub duration_minutes: u32,
    pub start_label: String,
    pub end_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyClass {
    pub entry: ClassEntry,
    pub completed: bool,
    pub color: SlotColor,
    pub start_label: String,
    pub end_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyView {
    pub day: Weekday,
    #[serde(with = "hhmm")]
    pub now: NaiveTime,
    pub time_format: TimeFormat,
    pub classes: Vec<DailyClass>,
    pub completed_count: usize,
    pub all_completed: bool,
    pub free_slots: Vec<FreeSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourLabel {
    pub column_start: u32,
    pub column_span: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlacement {
    pub entry: ClassEntry,
    pub position: GridPosition,
    pub color: SlotColor,
    pub start_label: String,
    pub end_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekView {
    pub days: Vec<Weekday>,
    pub columns: u32,
    pub rows: u32,
    pub hour_labels: Vec<HourLabel>,
    pub placements: Vec<WeekPlacement>,
    /// Entries on Sunday or outside the visible hours.
    pub hidden: Vec<Uuid>,
}
