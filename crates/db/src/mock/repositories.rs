use async_trait::async_trait;
use mockall::mock;
use timetable_core::models::{class_entry::ClassEntry, settings::AppSettings};
use uuid::Uuid;

use crate::store::TimetableStore;

// Mock store for handler tests
mock! {
    pub TimetableRepo {}

    #[async_trait]
    impl TimetableStore for TimetableRepo {
        async fn list_classes(&self, user_id: &str) -> eyre::Result<Vec<ClassEntry>>;

        async fn get_class(&self, user_id: &str, id: Uuid) -> eyre::Result<Option<ClassEntry>>;

        async fn create_classes(
            &self,
            user_id: &str,
            entries: Vec<ClassEntry>,
        ) -> eyre::Result<Vec<ClassEntry>>;

        async fn update_class(
            &self,
            user_id: &str,
            entry: ClassEntry,
        ) -> eyre::Result<Option<ClassEntry>>;

        async fn delete_class(&self, user_id: &str, id: Uuid) -> eyre::Result<bool>;

        async fn clear_classes(&self, user_id: &str) -> eyre::Result<u64>;

        async fn get_settings(&self, user_id: &str) -> eyre::Result<Option<AppSettings>>;

        async fn save_settings(
            &self,
            user_id: &str,
            settings: AppSettings,
        ) -> eyre::Result<AppSettings>;
    }
}
