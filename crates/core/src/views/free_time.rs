//! Free time within a school day.
//!
//! A day runs from 08:00 to 20:00 with a fixed lunch break from 13:00 to
//! 14:00. Given the classes of one day, [`free_intervals`] returns every gap
//! in that window that is neither a class nor lunch.
//!
//! Only strictly overlapping busy intervals are merged. Two blocks that
//! touch (`a.end == b.start`) stay separate, which leaves a zero-length gap
//! between them; gaps are only emitted when the next block starts after the
//! running cursor, so zero-length gaps never appear in the output.
//!
//! Class intervals are clamped to the day window before merging. A class
//! that starts before 08:00 or ends after 20:00 only contributes the part
//! inside the window, and one that lies entirely outside contributes
//! nothing.

use crate::models::class_entry::ClassEntry;

use super::interval::Interval;

/// 08:00 to 20:00.
pub const DAY_WINDOW: Interval = Interval {
    start: 8 * 60,
    end: 20 * 60,
};

/// 13:00 to 14:00.
pub const LUNCH_BREAK: Interval = Interval {
    start: 13 * 60,
    end: 14 * 60,
};

/// Busy blocks of a day: the clamped classes plus lunch, sorted and merged.
pub fn merge_busy(classes: &[Interval]) -> Vec<Interval> {
    let mut busy: Vec<Interval> = classes
        .iter()
        .filter_map(|class| class.clamp_to(&DAY_WINDOW))
        .collect();
    busy.push(LUNCH_BREAK);
    busy.sort_by_key(|interval| interval.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(busy.len());
    for interval in busy {
        match merged.last_mut() {
            Some(last) if interval.start < last.end => {
                last.end = last.end.max(interval.end);
            }
            _ => merged.push(interval),
        }
    }
    merged
}

/// Gaps of the day window not covered by classes or lunch, in order.
pub fn free_intervals(classes: &[Interval]) -> Vec<Interval> {
    let mut free = Vec::new();
    let mut current = DAY_WINDOW.start;

    for block in merge_busy(classes) {
        if block.start > current {
            free.push(Interval::new(current, block.start));
        }
        current = current.max(block.end);
    }

    if current < DAY_WINDOW.end {
        free.push(Interval::new(current, DAY_WINDOW.end));
    }

    free
}

/// [`free_intervals`] over a day's entries.
pub fn free_intervals_for(entries: &[ClassEntry]) -> Vec<Interval> {
    let classes: Vec<Interval> = entries.iter().map(Interval::of_entry).collect();
    free_intervals(&classes)
}
