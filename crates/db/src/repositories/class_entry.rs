use crate::models::DbClassEntry;
use chrono::{NaiveTime, Utc};
use eyre::Result;
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

/// Inserts one entry on `conn`, which may be a connection inside an open
/// transaction.
#[allow(clippy::too_many_arguments)]
pub async fn create_class_entry(
    conn: &mut PgConnection,
    id: Uuid,
    user_id: &str,
    day: &str,
    subject: &str,
    venue: &str,
    slot: &str,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<DbClassEntry> {
    let now = Utc::now();

    tracing::debug!(
        "Creating class entry: id={}, user_id={}, day={}, slot={}",
        id, user_id, day, slot
    );

    let entry = sqlx::query_as::<_, DbClassEntry>(
        r#"
        INSERT INTO class_entries (id, user_id, day, subject, venue, slot, start_time, end_time, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, user_id, day, subject, venue, slot, start_time, end_time, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(day)
    .bind(subject)
    .bind(venue)
    .bind(slot)
    .bind(start_time)
    .bind(end_time)
    .bind(now)
    .fetch_one(conn)
    .await?;

    Ok(entry)
}

pub async fn get_class_entries_by_user(
    pool: &Pool<Postgres>,
    user_id: &str,
) -> Result<Vec<DbClassEntry>> {
    let entries = sqlx::query_as::<_, DbClassEntry>(
        r#"
        SELECT id, user_id, day, subject, venue, slot, start_time, end_time, created_at
        FROM class_entries
        WHERE user_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    tracing::debug!("Loaded {} class entries for user_id={}", entries.len(), user_id);
    Ok(entries)
}

pub async fn get_class_entry_by_id(
    pool: &Pool<Postgres>,
    user_id: &str,
    id: Uuid,
) -> Result<Option<DbClassEntry>> {
    let entry = sqlx::query_as::<_, DbClassEntry>(
        r#"
        SELECT id, user_id, day, subject, venue, slot, start_time, end_time, created_at
        FROM class_entries
        WHERE user_id = $1 AND id = $2
        "#,
    )
    .bind(user_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(entry)
}

/// Replaces the editable fields of an entry. The day is never changed.
#[allow(clippy::too_many_arguments)]
pub async fn update_class_entry(
    pool: &Pool<Postgres>,
    user_id: &str,
    id: Uuid,
    subject: &str,
    venue: &str,
    slot: &str,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<Option<DbClassEntry>> {
    let entry = sqlx::query_as::<_, DbClassEntry>(
        r#"
        UPDATE class_entries
        SET subject = $3, venue = $4, slot = $5, start_time = $6, end_time = $7
        WHERE user_id = $1 AND id = $2
        RETURNING id, user_id, day, subject, venue, slot, start_time, end_time, created_at
        "#,
    )
    .bind(user_id)
    .bind(id)
    .bind(subject)
    .bind(venue)
    .bind(slot)
    .bind(start_time)
    .bind(end_time)
    .fetch_optional(pool)
    .await?;

    Ok(entry)
}

pub async fn delete_class_entry(pool: &Pool<Postgres>, user_id: &str, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM class_entries
        WHERE user_id = $1 AND id = $2
        "#,
    )
    .bind(user_id)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_class_entries_by_user(pool: &Pool<Postgres>, user_id: &str) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM class_entries
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    tracing::debug!(
        "Deleted {} class entries for user_id={}",
        result.rows_affected(),
        user_id
    );
    Ok(result.rows_affected())
}
