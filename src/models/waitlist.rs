use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntryRow {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub primary_activity: String,
    pub created_at: String,
}
