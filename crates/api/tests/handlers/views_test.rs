use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use timetable_core::{
    models::{
        class_entry::Weekday,
        settings::{AppSettings, TimeFormat},
        view::{DailyView, GridPosition, WeekView},
    },
    palette::SlotColor,
};

use crate::test_utils::{class_entry, t, user_header, user_value, TestContext, USER};

#[tokio::test]
async fn test_daily_view_marks_completed_and_lists_free_time() {
    let mut ctx = TestContext::new();
    let entries = vec![
        class_entry(Weekday::Monday, "B1", t(11, 0), t(12, 40)),
        class_entry(Weekday::Monday, "A1", t(9, 0), t(9, 50)),
        class_entry(Weekday::Friday, "C1", t(8, 0), t(8, 50)),
    ];
    ctx.store
        .expect_get_settings()
        .withf(|user_id| user_id == USER)
        .times(1)
        .returning(|_| Ok(None));
    ctx.store
        .expect_list_classes()
        .times(1)
        .returning(move |_| Ok(entries.clone()));

    let response = ctx
        .server()
        .get("/api/views/daily")
        .add_query_param("day", "Monday")
        .add_query_param("at", "10:00")
        .add_header(user_header(), user_value())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let view: DailyView = response.json();
    assert_eq!(view.day, Weekday::Monday);
    assert_eq!(view.now, t(10, 0));
    assert_eq!(view.time_format, TimeFormat::TwentyFourHour);

    let classes: Vec<(&str, bool)> = view
        .classes
        .iter()
        .map(|class| (class.entry.slot.as_str(), class.completed))
        .collect();
    assert_eq!(classes, vec![("A1", true), ("B1", false)]);
    assert_eq!(view.completed_count, 1);
    assert!(!view.all_completed);

    let free: Vec<(&str, &str, u32)> = view
        .free_slots
        .iter()
        .map(|slot| (slot.start_label.as_str(), slot.end_label.as_str(), slot.duration_minutes))
        .collect();
    assert_eq!(
        free,
        vec![
            ("08:00", "09:00", 60),
            ("09:50", "11:00", 70),
            ("12:40", "13:00", 20),
            ("14:00", "20:00", 360),
        ]
    );
}

#[tokio::test]
async fn test_daily_view_uses_stored_time_format() {
    let mut ctx = TestContext::new();
    let entries = vec![class_entry(Weekday::Saturday, "G2", t(15, 0), t(15, 50))];
    ctx.store.expect_get_settings().times(1).returning(|_| {
        Ok(Some(AppSettings {
            time_format: TimeFormat::TwelveHour,
            ..AppSettings::default()
        }))
    });
    ctx.store
        .expect_list_classes()
        .times(1)
        .returning(move |_| Ok(entries.clone()));

    let response = ctx
        .server()
        .get("/api/views/daily")
        .add_query_param("day", "Saturday")
        .add_query_param("at", "16:00")
        .add_header(user_header(), user_value())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let view: DailyView = response.json();
    assert_eq!(view.classes[0].start_label, "3:00 PM");
    assert_eq!(view.classes[0].color, SlotColor::Lime);
    assert!(view.all_completed);
    assert_eq!(view.free_slots[0].start_label, "8:00 AM");
}

#[tokio::test]
async fn test_daily_view_for_empty_day_is_whole_window_minus_lunch() {
    let mut ctx = TestContext::new();
    ctx.store.expect_get_settings().returning(|_| Ok(None));
    ctx.store.expect_list_classes().returning(|_| Ok(Vec::new()));

    let response = ctx
        .server()
        .get("/api/views/daily")
        .add_query_param("day", "Sunday")
        .add_query_param("at", "09:00")
        .add_header(user_header(), user_value())
        .await;

    let view: DailyView = response.json();
    assert!(view.classes.is_empty());
    assert!(!view.all_completed);
    let free: Vec<u32> = view.free_slots.iter().map(|slot| slot.duration_minutes).collect();
    assert_eq!(free, vec![300, 360]);
}

#[tokio::test]
async fn test_daily_view_rejects_malformed_time() {
    let mut ctx = TestContext::new();
    ctx.store.expect_get_settings().times(0);
    ctx.store.expect_list_classes().times(0);

    let response = ctx
        .server()
        .get("/api/views/daily")
        .add_query_param("at", "25:00")
        .add_header(user_header(), user_value())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_week_view_places_visible_entries() {
    let mut ctx = TestContext::new();
    let monday = class_entry(Weekday::Monday, "A1", t(8, 0), t(8, 50));
    let wednesday = class_entry(Weekday::Wednesday, "L31+L32", t(14, 0), t(15, 40));
    let sunday = class_entry(Weekday::Sunday, "X1", t(10, 0), t(10, 50));
    let late = class_entry(Weekday::Tuesday, "Y1", t(20, 30), t(21, 30));
    let entries = vec![wednesday.clone(), late.clone(), sunday.clone(), monday.clone()];

    ctx.store.expect_get_settings().times(1).returning(|_| Ok(None));
    ctx.store
        .expect_list_classes()
        .times(1)
        .returning(move |_| Ok(entries.clone()));

    let response = ctx
        .server()
        .get("/api/views/week")
        .add_header(user_header(), user_value())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let view: WeekView = response.json();
    assert_eq!(view.columns, 27);
    assert_eq!(view.rows, 7);
    assert_eq!(view.days.first(), Some(&Weekday::Monday));
    assert_eq!(view.hour_labels.len(), 13);
    assert_eq!(view.hour_labels[0].label, "8 AM");

    let placed: Vec<(uuid::Uuid, GridPosition)> = view
        .placements
        .iter()
        .map(|placement| (placement.entry.id, placement.position))
        .collect();
    assert_eq!(
        placed,
        vec![
            (
                monday.id,
                GridPosition {
                    row: 2,
                    column_start: 2,
                    column_span: 2,
                }
            ),
            (
                wednesday.id,
                GridPosition {
                    row: 4,
                    column_start: 14,
                    column_span: 3,
                }
            ),
        ]
    );

    let mut hidden = view.hidden.clone();
    hidden.sort();
    let mut expected = vec![sunday.id, late.id];
    expected.sort();
    assert_eq!(hidden, expected);
}
