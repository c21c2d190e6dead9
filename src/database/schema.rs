use sqlx::SqlitePool;

// The UNIQUE constraint on email is the real uniqueness guard; the service's
// pre-check only exists to give a friendlier error without attempting a write.
const SQL_CREATE_WAITLIST: &str = r#"
CREATE TABLE IF NOT EXISTS waitlist (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  full_name TEXT NOT NULL,
  email TEXT NOT NULL UNIQUE,
  primary_activity TEXT NOT NULL,
  created_at TEXT NOT NULL
)
"#;

pub async fn init_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_WAITLIST).execute(pool).await?;
    Ok(())
}
