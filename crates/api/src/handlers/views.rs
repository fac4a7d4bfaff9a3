//! # View Handlers
//!
//! Read-only endpoints that load the caller's timetable and settings and
//! hand them to the pure view builders in `timetable_core::views`.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, Local, NaiveTime};
use serde::Deserialize;
use std::sync::Arc;
use timetable_core::{
    models::{
        class_entry::Weekday,
        time::{hhmm_option, minutes_of_day, time_from_minutes},
        view::{DailyView, WeekView},
    },
    timetable::Timetable,
    views,
};

use super::settings::load_settings;
use crate::{
    middleware::{auth::CurrentUser, error_handling::AppError},
    ApiState,
};

/// Query parameters for the daily view
///
/// Both default to the server's local clock, so a plain
/// `GET /api/views/daily` shows today as of now.
#[derive(Debug, Default, Deserialize)]
pub struct DailyViewQuery {
    /// Day to show
    pub day: Option<Weekday>,

    /// Reference time ("HH:MM") for the completed flags
    #[serde(default, with = "hhmm_option")]
    pub at: Option<NaiveTime>,
}

fn local_now() -> (Weekday, NaiveTime) {
    let now = Local::now();
    let time = now.time();
    // Drop seconds so "now" compares like the minute-granular class times.
    let time = time_from_minutes(minutes_of_day(time)).unwrap_or(time);
    (Weekday::from(now.weekday()), time)
}

#[axum::debug_handler]
pub async fn daily_view(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Query(query): Query<DailyViewQuery>,
) -> Result<Json<DailyView>, AppError> {
    let (today, now) = local_now();
    let day = query.day.unwrap_or(today);
    let at = query.at.unwrap_or(now);

    let settings = load_settings(&state, &user).await?;
    let timetable = Timetable::from_entries(state.store.list_classes(user.id()).await?);

    Ok(Json(views::daily_view(&timetable, day, at, &settings)))
}

#[axum::debug_handler]
pub async fn week_view(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
) -> Result<Json<WeekView>, AppError> {
    let settings = load_settings(&state, &user).await?;
    let timetable = Timetable::from_entries(state.store.list_classes(user.id()).await?);

    Ok(Json(views::week_view(&timetable, &settings)))
}
