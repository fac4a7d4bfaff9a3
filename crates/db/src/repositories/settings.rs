use crate::models::DbUserSettings;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_settings_by_user(
    pool: &Pool<Postgres>,
    user_id: &str,
) -> Result<Option<DbUserSettings>> {
    let settings = sqlx::query_as::<_, DbUserSettings>(
        r#"
        SELECT user_id, time_format, theme, accent, updated_at
        FROM user_settings
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(settings)
}

pub async fn upsert_settings(
    pool: &Pool<Postgres>,
    user_id: &str,
    time_format: &str,
    theme: &str,
    accent: &str,
) -> Result<DbUserSettings> {
    let now = Utc::now();

    let settings = sqlx::query_as::<_, DbUserSettings>(
        r#"
        INSERT INTO user_settings (user_id, time_format, theme, accent, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (user_id)
        DO UPDATE SET time_format = $2, theme = $3, accent = $4, updated_at = $5
        RETURNING user_id, time_format, theme, accent, updated_at
        "#,
    )
    .bind(user_id)
    .bind(time_format)
    .bind(theme)
    .bind(accent)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(settings)
}
