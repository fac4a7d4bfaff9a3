use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::{class_entry::ClassEntry, time::minutes_of_day};

/// A span of one day in minutes since midnight, `[start, end)`.
///
/// # Invariants
/// `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    /// Creates an interval. An inverted pair collapses to an empty interval
    /// at `start`.
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn from_times(start: NaiveTime, end: NaiveTime) -> Self {
        Self::new(minutes_of_day(start), minutes_of_day(end))
    }

    pub fn of_entry(entry: &ClassEntry) -> Self {
        Self::from_times(entry.start_time, entry.end_time)
    }

    #[inline]
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Intersection with `window`, or `None` if nothing remains.
    pub fn clamp_to(&self, window: &Self) -> Option<Self> {
        let start = self.start.max(window.start);
        let end = self.end.min(window.end);
        (start < end).then_some(Self { start, end })
    }
}
