//! Mounted at `/graphql` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::graphql;
use crate::state::AppState;

/// ```text
/// GET    /    -> graphiql
/// POST   /    -> execute
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(graphql::graphiql).post(graphql::execute))
}
