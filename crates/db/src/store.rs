//! # Timetable Store
//!
//! The seam between the HTTP handlers and Postgres. Handlers only see
//! [`TimetableStore`], which speaks in domain types, so they can be driven
//! by [`crate::mock::repositories::MockTimetableRepo`] in tests.
//! [`PgTimetableStore`] is the production implementation on top of the
//! repository functions.
//!
//! Every operation is scoped to a user id handed over by the identity
//! provider; one user can never see or touch another user's entries.

use async_trait::async_trait;
use eyre::Result;
use timetable_core::models::{class_entry::ClassEntry, settings::AppSettings};
use uuid::Uuid;

use crate::{
    repositories::{class_entry, settings as settings_repo},
    DbPool,
};

#[async_trait]
pub trait TimetableStore: Send + Sync {
    async fn list_classes(&self, user_id: &str) -> Result<Vec<ClassEntry>>;

    async fn get_class(&self, user_id: &str, id: Uuid) -> Result<Option<ClassEntry>>;

    /// Stores all entries or none of them.
    async fn create_classes(&self, user_id: &str, entries: Vec<ClassEntry>) -> Result<Vec<ClassEntry>>;

    /// Returns `None` when no entry with that id belongs to the user.
    async fn update_class(&self, user_id: &str, entry: ClassEntry) -> Result<Option<ClassEntry>>;

    async fn delete_class(&self, user_id: &str, id: Uuid) -> Result<bool>;

    /// Removes every entry of the user and reports how many were removed.
    async fn clear_classes(&self, user_id: &str) -> Result<u64>;

    async fn get_settings(&self, user_id: &str) -> Result<Option<AppSettings>>;

    async fn save_settings(&self, user_id: &str, settings: AppSettings) -> Result<AppSettings>;
}

#[derive(Debug, Clone)]
pub struct PgTimetableStore {
    pool: DbPool,
}

impl PgTimetableStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimetableStore for PgTimetableStore {
    async fn list_classes(&self, user_id: &str) -> Result<Vec<ClassEntry>> {
        class_entry::get_class_entries_by_user(&self.pool, user_id)
            .await?
            .into_iter()
            .map(ClassEntry::try_from)
            .collect()
    }

    async fn get_class(&self, user_id: &str, id: Uuid) -> Result<Option<ClassEntry>> {
        class_entry::get_class_entry_by_id(&self.pool, user_id, id)
            .await?
            .map(ClassEntry::try_from)
            .transpose()
    }

    async fn create_classes(&self, user_id: &str, entries: Vec<ClassEntry>) -> Result<Vec<ClassEntry>> {
        // Dropping the transaction on an early return rolls it back.
        let mut tx = self.pool.begin().await?;

        let mut created = Vec::with_capacity(entries.len());
        for entry in entries {
            let row = class_entry::create_class_entry(
                &mut *tx,
                entry.id,
                user_id,
                entry.day.name(),
                &entry.subject,
                &entry.venue,
                &entry.slot,
                entry.start_time,
                entry.end_time,
            )
            .await?;
            created.push(ClassEntry::try_from(row)?);
        }

        tx.commit().await?;
        Ok(created)
    }

    async fn update_class(&self, user_id: &str, entry: ClassEntry) -> Result<Option<ClassEntry>> {
        class_entry::update_class_entry(
            &self.pool,
            user_id,
            entry.id,
            &entry.subject,
            &entry.venue,
            &entry.slot,
            entry.start_time,
            entry.end_time,
        )
        .await?
        .map(ClassEntry::try_from)
        .transpose()
    }

    async fn delete_class(&self, user_id: &str, id: Uuid) -> Result<bool> {
        class_entry::delete_class_entry(&self.pool, user_id, id).await
    }

    async fn clear_classes(&self, user_id: &str) -> Result<u64> {
        class_entry::delete_class_entries_by_user(&self.pool, user_id).await
    }

    async fn get_settings(&self, user_id: &str) -> Result<Option<AppSettings>> {
        settings_repo::get_settings_by_user(&self.pool, user_id)
            .await?
            .map(AppSettings::try_from)
            .transpose()
    }

    async fn save_settings(&self, user_id: &str, settings: AppSettings) -> Result<AppSettings> {
        let row = settings_repo::upsert_settings(
            &self.pool,
            user_id,
            settings.time_format.as_str(),
            settings.theme.as_str(),
            settings.accent.as_str(),
        )
        .await?;

        AppSettings::try_from(row)
    }
}
