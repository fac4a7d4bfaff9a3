use chrono::{DateTime, NaiveTime, Utc};
use eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timetable_core::models::{
    class_entry::{ClassEntry, Weekday},
    settings::AppSettings,
};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClassEntry {
    pub id: Uuid,
    pub user_id: String,
    pub day: String,
    pub subject: String,
    pub venue: String,
    pub slot: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbClassEntry> for ClassEntry {
    type Error = eyre::Report;

    fn try_from(row: DbClassEntry) -> Result<Self> {
        let day = row
            .day
            .parse::<Weekday>()
            .map_err(|e| eyre!("Corrupt class entry {}: {}", row.id, e))?;

        Ok(ClassEntry {
            id: row.id,
            day,
            subject: row.subject,
            venue: row.venue,
            slot: row.slot,
            start_time: row.start_time,
            end_time: row.end_time,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUserSettings {
    pub user_id: String,
    pub time_format: String,
    pub theme: String,
    pub accent: String,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DbUserSettings> for AppSettings {
    type Error = eyre::Report;

    fn try_from(row: DbUserSettings) -> Result<Self> {
        Ok(AppSettings {
            time_format: row.time_format.parse()?,
            theme: row.theme.parse()?,
            accent: row.accent.parse()?,
        })
    }
}
