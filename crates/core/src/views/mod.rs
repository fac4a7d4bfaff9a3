//! Derived views over a timetable.
//!
//! [`free_time`] and [`grid`] are the two pure computations everything else
//! is assembled from: the first merges a day's busy intervals and returns
//! the gaps, the second places a single entry on the weekly grid.
//! [`daily`] and [`week`] combine them with formatting and colors into the
//! payloads the API returns.

pub mod daily;
pub mod free_time;
pub mod grid;
pub mod interval;
pub mod week;

pub use daily::daily_view;
pub use free_time::{free_intervals, merge_busy};
pub use grid::place;
pub use interval::Interval;
pub use week::week_view;
