//! # Timetable Core
//!
//! Domain types and pure computations for the class timetable service.
//!
//! Nothing in this crate performs I/O. Persistence lives in `timetable-db`
//! and the HTTP surface in `timetable-api`; both hand plain values to the
//! functions here and serialize whatever comes back.
//!
//! - [`models`]: class entries, weekdays, settings and view payloads
//! - [`views`]: free-time merging, weekly grid placement and view assembly
//! - [`format`]: clock labels in 24h / 12h / condensed form
//! - [`palette`]: stable slot-to-color mapping
//! - [`validation`]: checks applied before entries reach the store
//! - [`timetable`]: entries grouped by day

pub mod errors;
pub mod format;
pub mod models;
pub mod palette;
pub mod timetable;
pub mod validation;
pub mod views;
