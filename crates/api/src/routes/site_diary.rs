//! Route definitions for site diaries.
//!
//! Mounted at `/site-diary` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::site_diary;
use crate::state::AppState;

/// Site diary routes.
///
/// ```text
/// GET    /        -> list_site_diaries
/// POST   /        -> create_site_diary
/// GET    /{id}    -> get_site_diary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(site_diary::list_site_diaries).post(site_diary::create_site_diary),
        )
        .route("/{id}", get(site_diary::get_site_diary))
}
