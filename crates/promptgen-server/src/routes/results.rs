//! Results Routes - Results view and download
//!
//! A result is found through its session key, or decoded from a share
//! link's `data` parameter.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Local;
use promptgen::domain::{download_artifact, download_file_name};

use crate::models::{ResultsResponse, SharedResultQuery};
use crate::routes::error_response;
use crate::AppState;

/// Results view for a session
#[utoipa::path(
    get,
    path = "/api/results/{session_key}",
    params(("session_key" = String, Path, description = "Session key from the submission")),
    responses(
        (status = 200, description = "Result found", body = ResultsResponse),
        (status = 404, description = "No prompt data found")
    ),
    tag = "Results"
)]
pub async fn get_result(
    State(state): State<AppState>,
    Path(session_key): Path<String>,
) -> Result<Json<ResultsResponse>, (StatusCode, String)> {
    let view = state
        .results_service
        .get(Some(&session_key), None)
        .await
        .map_err(error_response)?;

    Ok(Json(view.into()))
}

/// Results view for a shared link
#[utoipa::path(
    get,
    path = "/api/results",
    params(SharedResultQuery),
    responses(
        (status = 200, description = "Result decoded", body = ResultsResponse),
        (status = 404, description = "No prompt data found")
    ),
    tag = "Results"
)]
pub async fn get_shared_result(
    State(state): State<AppState>,
    Query(query): Query<SharedResultQuery>,
) -> Result<Json<ResultsResponse>, (StatusCode, String)> {
    let view = state
        .results_service
        .get(None, query.data.as_deref())
        .await
        .map_err(error_response)?;

    Ok(Json(view.into()))
}

/// Plain-text download of a session's result
#[utoipa::path(
    get,
    path = "/api/results/{session_key}/download",
    params(("session_key" = String, Path, description = "Session key from the submission")),
    responses(
        (status = 200, description = "Text attachment", content_type = "text/plain"),
        (status = 404, description = "No prompt data found")
    ),
    tag = "Results"
)]
pub async fn download_result(
    State(state): State<AppState>,
    Path(session_key): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let view = state
        .results_service
        .get(Some(&session_key), None)
        .await
        .map_err(error_response)?;

    let now = Local::now();
    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", download_file_name(now)),
        ),
    ];

    Ok((headers, download_artifact(&view.result, now)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/results", get(get_shared_result))
        .route("/api/results/:session_key", get(get_result))
        .route("/api/results/:session_key/download", get(download_result))
}
