use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create class_entries table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS class_entries (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id VARCHAR(255) NOT NULL,
            day VARCHAR(16) NOT NULL,
            subject VARCHAR(255) NOT NULL,
            venue VARCHAR(255) NOT NULL,
            slot VARCHAR(64) NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_class_time CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create user_settings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_settings (
            user_id VARCHAR(255) PRIMARY KEY,
            time_format VARCHAR(16) NOT NULL DEFAULT '24h',
            theme VARCHAR(16) NOT NULL DEFAULT 'light',
            accent VARCHAR(16) NOT NULL DEFAULT 'blue',
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes; a prepared statement takes a single command
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_class_entries_user_id ON class_entries(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_class_entries_user_day ON class_entries(user_id, day)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
