use sqlx::SqlitePool;

use crate::models::WaitlistEntryRow;

const SQL_FIND_BY_EMAIL: &str = r#"
SELECT
  id,
  full_name,
  email,
  primary_activity,
  created_at
FROM waitlist
WHERE email = ?1
LIMIT 1
"#;

const SQL_INSERT_ENTRY: &str = r#"
INSERT INTO waitlist (
  full_name,
  email,
  primary_activity,
  created_at
) VALUES (?1, ?2, ?3, ?4)
"#;

const SQL_LIST_ALL: &str = r#"
SELECT
  id,
  full_name,
  email,
  primary_activity,
  created_at
FROM waitlist
ORDER BY id ASC
"#;

pub struct NewWaitlistEntry<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub primary_activity: &'a str,
}

pub async fn find_by_email(
    pool: &SqlitePool,
    email: &str,
) -> sqlx::Result<Option<WaitlistEntryRow>> {
    sqlx::query_as::<_, WaitlistEntryRow>(SQL_FIND_BY_EMAIL)
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Inserts a new entry and returns it with the storage-assigned id.
/// A duplicate email surfaces as a database unique-constraint error.
pub async fn insert_entry(
    pool: &SqlitePool,
    entry: NewWaitlistEntry<'_>,
) -> sqlx::Result<WaitlistEntryRow> {
    let created_at = chrono::Utc::now().to_rfc3339();
    let res = sqlx::query(SQL_INSERT_ENTRY)
        .bind(entry.full_name)
        .bind(entry.email)
        .bind(entry.primary_activity)
        .bind(&created_at)
        .execute(pool)
        .await?;

    Ok(WaitlistEntryRow {
        id: res.last_insert_rowid(),
        full_name: entry.full_name.to_string(),
        email: entry.email.to_string(),
        primary_activity: entry.primary_activity.to_string(),
        created_at,
    })
}

pub async fn list_all(pool: &SqlitePool) -> sqlx::Result<Vec<WaitlistEntryRow>> {
    sqlx::query_as::<_, WaitlistEntryRow>(SQL_LIST_ALL)
        .fetch_all(pool)
        .await
}
