//! Entry validation.
//!
//! The free-time and grid computations assume well-formed entries: every
//! entry has `start_time < end_time`. These checks run on incoming requests
//! before anything is written, and are the only place that guarantee is
//! established.

use crate::{
    errors::{TimetableError, TimetableResult},
    models::class_entry::{CreateClassesRequest, UpdateClassRequest},
};

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn require_fields(subject: &str, block: &str, room: &str, slot: &str) -> TimetableResult<()> {
    if is_blank(subject) || is_blank(room) || is_blank(slot) {
        return Err(TimetableError::Validation(
            "Subject, Room, and Slot are required.".to_string(),
        ));
    }
    if is_blank(block) {
        return Err(TimetableError::Validation("Block is required.".to_string()));
    }
    Ok(())
}

pub fn validate_create(request: &CreateClassesRequest) -> TimetableResult<()> {
    require_fields(&request.subject, &request.block, &request.room, &request.slot)?;

    if request.days.is_empty() {
        return Err(TimetableError::Validation(
            "Please select at least one day.".to_string(),
        ));
    }

    // BTreeMap iteration reports the earliest offending day first.
    for (day, times) in &request.days {
        if times.start_time >= times.end_time {
            return Err(TimetableError::Validation(format!(
                "End time must be after start time for {}.",
                day
            )));
        }
    }

    Ok(())
}

pub fn validate_update(request: &UpdateClassRequest) -> TimetableResult<()> {
    require_fields(&request.subject, &request.block, &request.room, &request.slot)?;

    if request.start_time >= request.end_time {
        return Err(TimetableError::Validation(
            "End time must be after start time.".to_string(),
        ));
    }

    Ok(())
}
