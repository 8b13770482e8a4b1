pub mod graphql;
pub mod health;
pub mod site_diary;

use axum::Router;

use crate::state::AppState;

/// Prefix the [`api_routes`] tree is nested under.
pub const API_PREFIX: &str = "/api";

/// Where the GraphQL router sits inside [`api_routes`].
pub const GRAPHQL_ROUTE: &str = "/graphql";

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /site-diary                 list (summary), create
/// /site-diary/{id}            get
///
/// /graphql                    execute (POST), GraphiQL (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // REST entry point.
        .nest("/site-diary", site_diary::router())
        // GraphQL entry point.
        .nest(GRAPHQL_ROUTE, graphql::router())
}
