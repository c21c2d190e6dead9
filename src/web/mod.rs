pub mod middleware;
pub mod routes;

use axum::{
    middleware as axum_middleware,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

pub fn router(pool: SqlitePool) -> Router {
    // The dashboard is the only page behind the (mock) session.
    let protected_routes = Router::new()
        .route("/dashboard", get(routes::dashboard::dashboard_handler))
        .layer(axum_middleware::from_fn(middleware::session::require_session));

    Router::new()
        // Marketing pages
        .route("/", get(routes::pages::home_handler))
        .route("/technology", get(routes::pages::technology_handler))
        .route("/demo/adaptiq", get(routes::pages::adaptiq_demo_handler))
        .route("/demo/lab", get(routes::pages::lab_handler))
        // Mock auth flow
        .route(
            "/login",
            get(routes::auth::login_page).post(routes::auth::login_handler),
        )
        .route("/logout", post(routes::auth::logout_handler))
        // Waitlist API
        .route(
            "/api/waitlist",
            post(routes::waitlist_api::create_waitlist_entry)
                .get(routes::waitlist_api::list_waitlist_entries),
        )
        .merge(protected_routes)
        // Static files
        .nest_service(
            "/assets",
            get_service(ServeDir::new("assets")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        .layer(CatchPanicLayer::new())
        .with_state(pool)
}
