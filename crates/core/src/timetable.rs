use std::collections::BTreeMap;

use crate::models::class_entry::{ClassEntry, GetTimetableResponse, Weekday};

/// A user's classes grouped by weekday, each day sorted by start time.
///
/// Built once from whatever the store returned; a changed timetable is a
/// new `Timetable`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timetable {
    days: BTreeMap<Weekday, Vec<ClassEntry>>,
}

impl Timetable {
    pub fn from_entries(entries: impl IntoIterator<Item = ClassEntry>) -> Self {
        let mut days: BTreeMap<Weekday, Vec<ClassEntry>> = BTreeMap::new();
        for entry in entries {
            days.entry(entry.day).or_default().push(entry);
        }
        for entries in days.values_mut() {
            entries.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        }
        Self { days }
    }

    pub fn day(&self, day: Weekday) -> &[ClassEntry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// All entries in week order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassEntry> {
        self.days.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Timetable> for GetTimetableResponse {
    fn from(timetable: Timetable) -> Self {
        let total = timetable.len();
        GetTimetableResponse {
            days: timetable.days,
            total,
        }
    }
}
