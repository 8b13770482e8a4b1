//! REST handlers for site diaries.
//!
//! Thin adapters over [`DiaryRecordService`](sitediary_core::service::DiaryRecordService):
//! the list endpoint returns the summary projection, the others the full one.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sitediary_core::diary::DiaryCandidate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /site-diary
///
/// List every diary as `{id, date, title, createdBy}`, newest date first.
pub async fn list_site_diaries(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let diaries = state.diaries.list().await?;
    Ok(Json(DataResponse { data: diaries }))
}

/// POST /site-diary
///
/// Create a diary entry. Returns 201 with the full projection.
pub async fn create_site_diary(
    State(state): State<AppState>,
    payload: Result<Json<DiaryCandidate>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(candidate) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let diary = state.diaries.create(&candidate).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: diary })))
}

/// GET /site-diary/{id}
///
/// Get a single diary entry, full projection.
pub async fn get_site_diary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let diary = state.diaries.get(&id).await?;
    Ok(Json(DataResponse { data: diary }))
}
