use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use timetable_core::models::class_entry::{
    ClassEntry, ClearTimetableResponse, CreateClassesResponse, GetTimetableResponse, Weekday,
};
use uuid::Uuid;

use crate::test_utils::{class_entry, t, user_header, user_value, TestContext, USER};

#[tokio::test]
async fn test_list_classes_groups_by_day() {
    let mut ctx = TestContext::new();
    let entries = vec![
        class_entry(Weekday::Tuesday, "B1", t(10, 0), t(10, 50)),
        class_entry(Weekday::Monday, "A2", t(14, 0), t(14, 50)),
        class_entry(Weekday::Monday, "A1", t(8, 0), t(8, 50)),
    ];
    let returned = entries.clone();
    ctx.store
        .expect_list_classes()
        .withf(|user_id| user_id == USER)
        .times(1)
        .returning(move |_| Ok(returned.clone()));

    let response = ctx
        .server()
        .get("/api/classes")
        .add_header(user_header(), user_value())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: GetTimetableResponse = response.json();
    assert_eq!(body.total, 3);
    assert_eq!(body.days.len(), 2);

    let monday: Vec<&str> = body.days[&Weekday::Monday]
        .iter()
        .map(|entry| entry.slot.as_str())
        .collect();
    assert_eq!(monday, vec!["A1", "A2"]);
    assert_eq!(body.days[&Weekday::Tuesday], vec![entries[0].clone()]);
}

#[tokio::test]
async fn test_missing_user_header_is_rejected() {
    let mut ctx = TestContext::new();
    ctx.store.expect_list_classes().times(0);

    let response = ctx.server().get("/api/classes").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Authentication error: Sign in required");
}

#[tokio::test]
async fn test_create_classes_adds_one_entry_per_day() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_create_classes()
        .withf(|user_id, entries: &Vec<ClassEntry>| {
            user_id == USER
                && entries.len() == 2
                && entries.iter().all(|entry| {
                    entry.subject == "Operating Systems"
                        && entry.venue == "SJT, 301"
                        && entry.slot == "A1+TA1"
                })
        })
        .times(1)
        .returning(|_, entries| Ok(entries));

    let response = ctx
        .server()
        .post("/api/classes")
        .add_header(user_header(), user_value())
        .json(&json!({
            "subject": "  Operating Systems ",
            "block": "SJT",
            "room": "301",
            "slot": "A1+TA1",
            "days": {
                "Wednesday": { "start_time": "11:00", "end_time": "11:50" },
                "Monday": { "start_time": "09:00", "end_time": "09:50" }
            }
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: CreateClassesResponse = response.json();
    let days: Vec<Weekday> = body.created.iter().map(|entry| entry.day).collect();
    assert_eq!(days, vec![Weekday::Monday, Weekday::Wednesday]);
    assert_eq!(body.created[0].start_time, t(9, 0));
    assert_eq!(body.created[1].end_time, t(11, 50));
    assert_ne!(body.created[0].id, body.created[1].id);
}

#[tokio::test]
async fn test_create_classes_stores_all_days_in_one_batch() {
    let mut ctx = TestContext::new();
    // Every selected day goes to the store in a single call.
    ctx.store
        .expect_create_classes()
        .withf(|_, entries: &Vec<ClassEntry>| {
            let days: Vec<Weekday> = entries.iter().map(|entry| entry.day).collect();
            days == vec![Weekday::Monday, Weekday::Tuesday]
        })
        .times(1)
        .returning(|_, _| Err(eyre::eyre!("insert failed for Tuesday")));

    let response = ctx
        .server()
        .post("/api/classes")
        .add_header(user_header(), user_value())
        .json(&json!({
            "subject": "Data Structures",
            "block": "SJT",
            "room": "214",
            "slot": "B2+TB2",
            "days": {
                "Monday": { "start_time": "14:00", "end_time": "14:50" },
                "Tuesday": { "start_time": "15:00", "end_time": "15:50" }
            }
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body.get("created").is_none());
}

#[tokio::test]
async fn test_create_classes_rejects_inverted_times() {
    let mut ctx = TestContext::new();
    ctx.store.expect_create_classes().times(0);

    let response = ctx
        .server()
        .post("/api/classes")
        .add_header(user_header(), user_value())
        .json(&json!({
            "subject": "Compilers",
            "block": "TT",
            "room": "G04",
            "slot": "C2",
            "days": {
                "Tuesday": { "start_time": "10:00", "end_time": "09:00" }
            }
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Validation error: End time must be after start time for Tuesday."
    );
}

#[tokio::test]
async fn test_create_classes_requires_a_day() {
    let mut ctx = TestContext::new();
    ctx.store.expect_create_classes().times(0);

    let response = ctx
        .server()
        .post("/api/classes")
        .add_header(user_header(), user_value())
        .json(&json!({
            "subject": "Compilers",
            "block": "TT",
            "room": "G04",
            "slot": "C2"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Validation error: Please select at least one day.");
}

#[tokio::test]
async fn test_update_class_keeps_id_and_day() {
    let mut ctx = TestContext::new();
    let existing = class_entry(Weekday::Thursday, "D1", t(9, 0), t(9, 50));
    let id = existing.id;

    let found = existing.clone();
    ctx.store
        .expect_get_class()
        .withf(move |user_id, requested| user_id == USER && *requested == id)
        .times(1)
        .returning(move |_, _| Ok(Some(found.clone())));
    ctx.store
        .expect_update_class()
        .withf(move |_, entry: &ClassEntry| entry.id == id && entry.day == Weekday::Thursday)
        .times(1)
        .returning(|_, entry| Ok(Some(entry)));

    let response = ctx
        .server()
        .put(&format!("/api/classes/{}", id))
        .add_header(user_header(), user_value())
        .json(&json!({
            "subject": "Networks Lab",
            "block": "SMV",
            "room": "110",
            "slot": "L31+L32",
            "start_time": "14:00",
            "end_time": "15:40"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: ClassEntry = response.json();
    assert_eq!(
        updated,
        ClassEntry {
            id,
            day: Weekday::Thursday,
            subject: "Networks Lab".to_string(),
            venue: "SMV, 110".to_string(),
            slot: "L31+L32".to_string(),
            start_time: t(14, 0),
            end_time: t(15, 40),
        }
    );
}

#[tokio::test]
async fn test_update_unknown_class_is_not_found() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();
    ctx.store
        .expect_get_class()
        .times(1)
        .returning(|_, _| Ok(None));
    ctx.store.expect_update_class().times(0);

    let response = ctx
        .server()
        .put(&format!("/api/classes/{}", id))
        .add_header(user_header(), user_value())
        .json(&json!({
            "subject": "Networks",
            "block": "SMV",
            "room": "110",
            "slot": "E1",
            "start_time": "14:00",
            "end_time": "14:50"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        format!("Resource not found: Class with ID {} not found", id)
    );
}

#[tokio::test]
async fn test_delete_class() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();
    ctx.store
        .expect_delete_class()
        .withf(move |user_id, requested| user_id == USER && *requested == id)
        .times(1)
        .returning(|_, _| Ok(true));

    let response = ctx
        .server()
        .delete(&format!("/api/classes/{}", id))
        .add_header(user_header(), user_value())
        .await;

    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_unknown_class_is_not_found() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_delete_class()
        .times(1)
        .returning(|_, _| Ok(false));

    let response = ctx
        .server()
        .delete(&format!("/api/classes/{}", Uuid::new_v4()))
        .add_header(user_header(), user_value())
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clear_classes_reports_removed_count() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_clear_classes()
        .withf(|user_id| user_id == USER)
        .times(1)
        .returning(|_| Ok(3));

    let response = ctx
        .server()
        .delete("/api/classes")
        .add_header(user_header(), user_value())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: ClearTimetableResponse = response.json();
    assert_eq!(body.removed, 3);
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_list_classes()
        .times(1)
        .returning(|_| Err(eyre::eyre!("connection reset")));

    let response = ctx
        .server()
        .get("/api/classes")
        .add_header(user_header(), user_value())
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
