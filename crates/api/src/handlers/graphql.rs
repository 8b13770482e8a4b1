//! HTTP transport for the GraphQL schema.

use async_graphql::http::GraphiQLSource;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::routes::{API_PREFIX, GRAPHQL_ROUTE};
use crate::state::AppState;

/// POST /graphql
///
/// Execute a single GraphQL request. Resolver errors travel inside the
/// GraphQL response body with a 200 status; only an unreadable body is an
/// HTTP-level error.
pub async fn execute(
    State(state): State<AppState>,
    payload: Result<Json<async_graphql::Request>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let response = state.schema.execute(request).await;
    Ok(Json(response))
}

/// GET /graphql
///
/// Serve the GraphiQL explorer.
pub async fn graphiql() -> impl IntoResponse {
    let endpoint = format!("{API_PREFIX}{GRAPHQL_ROUTE}");
    Html(GraphiQLSource::build().endpoint(&endpoint).finish())
}
