//! The route table.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::views;

/// Builds the site router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(views::home))
        .route("/services", get(views::services_page))
        .route("/team", get(views::team_page))
        .route("/blog", get(views::blog_page))
        .route("/contact", get(views::contact_page).post(views::contact_submit))
        .route(
            "/admin/login",
            get(views::admin_login_page).post(views::admin_login_submit),
        )
        .route("/admin/dashboard", get(views::admin_dashboard))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(views::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
