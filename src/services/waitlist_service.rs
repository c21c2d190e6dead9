use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::warn;

use crate::database::waitlist_repo::{self, NewWaitlistEntry};
use crate::models::WaitlistEntryRow;

/// Raw signup payload as posted by the waitlist form. Missing fields fall
/// back to empty strings so they show up as field errors, not a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubmission {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub primary_activity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug)]
pub enum SubmissionError {
    Validation(Vec<FieldError>),
    DuplicateEmail,
    Storage(sqlx::Error),
}

impl From<sqlx::Error> for SubmissionError {
    fn from(e: sqlx::Error) -> Self {
        SubmissionError::Storage(e)
    }
}

/// Validated, trimmed submission. Only these three fields ever reach storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub full_name: String,
    pub email: String,
    pub primary_activity: String,
}

pub fn validate(raw: &RawSubmission) -> Result<ValidSubmission, Vec<FieldError>> {
    let mut errors = Vec::new();

    let full_name = raw.full_name.trim();
    if full_name.chars().count() < 2 {
        errors.push(FieldError {
            field: "fullName",
            message: "fullName must be at least 2 characters",
        });
    }

    let email = raw.email.trim();
    if !is_valid_email(email) {
        errors.push(FieldError {
            field: "email",
            message: "email must be a valid email address",
        });
    }

    // Lenient on purpose: the form offers a closed set of activities but any
    // non-empty value is accepted here.
    let primary_activity = raw.primary_activity.trim();
    if primary_activity.is_empty() {
        errors.push(FieldError {
            field: "primaryActivity",
            message: "primaryActivity must not be empty",
        });
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidSubmission {
        full_name: full_name.to_string(),
        email: email.to_string(),
        primary_activity: primary_activity.to_string(),
    })
}

fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if s.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Signup use case: validate, check for an existing email, insert.
///
/// The pre-check and the insert are not atomic. When two submissions race,
/// the loser hits the UNIQUE constraint on email and is reported as a
/// duplicate, same as if the pre-check had caught it.
pub async fn submit(
    pool: &SqlitePool,
    raw: RawSubmission,
) -> Result<WaitlistEntryRow, SubmissionError> {
    let valid = validate(&raw).map_err(SubmissionError::Validation)?;

    if waitlist_repo::find_by_email(pool, &valid.email)
        .await?
        .is_some()
    {
        return Err(SubmissionError::DuplicateEmail);
    }

    match waitlist_repo::insert_entry(
        pool,
        NewWaitlistEntry {
            full_name: &valid.full_name,
            email: &valid.email,
            primary_activity: &valid.primary_activity,
        },
    )
    .await
    {
        Ok(entry) => Ok(entry),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            warn!("Waitlist insert lost a duplicate race for {}", valid.email);
            Err(SubmissionError::DuplicateEmail)
        }
        Err(e) => Err(SubmissionError::Storage(e)),
    }
}

pub async fn list(pool: &SqlitePool) -> sqlx::Result<Vec<WaitlistEntryRow>> {
    waitlist_repo::list_all(pool).await
}

pub async fn status_for_email(
    pool: &SqlitePool,
    email: &str,
) -> sqlx::Result<Option<WaitlistEntryRow>> {
    waitlist_repo::find_by_email(pool, email).await
}
