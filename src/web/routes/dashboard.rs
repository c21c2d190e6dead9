use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Extension,
};
use sqlx::SqlitePool;
use tracing::warn;

use crate::models::WaitlistEntryRow;
use crate::services::waitlist_service;
use crate::web::middleware::session::AuthenticatedVisitor;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub email: String,
    pub waitlist_entry: Option<WaitlistEntryRow>,
}

pub async fn dashboard_handler(
    Extension(visitor): Extension<AuthenticatedVisitor>,
    State(pool): State<SqlitePool>,
) -> impl IntoResponse {
    let entry = match waitlist_service::status_for_email(&pool, &visitor.email).await {
        Ok(v) => v,
        Err(e) => {
            warn!("Waitlist status lookup failed for {}: {}", visitor.email, e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let template = DashboardTemplate {
        email: visitor.email,
        waitlist_entry: entry,
    };
    Html(template.render().unwrap()).into_response()
}
