//! Prompt Routes - Form submission
//!
//! Validates the form, runs the enhancer and stores the result under a new
//! session key for the results view.

use axum::{extract::State, routing::post, Json, Router};

use crate::models::{GeneratePromptRequest, SubmissionResponse};
use crate::routes::error_response;
use crate::AppState;

/// Submit a prompt for enhancement
#[utoipa::path(
    post,
    path = "/api/prompts",
    request_body = GeneratePromptRequest,
    responses(
        (status = 200, description = "Prompt enhanced", body = SubmissionResponse),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Generation failed")
    ),
    tag = "Prompt"
)]
pub async fn submit_prompt(
    State(state): State<AppState>,
    Json(payload): Json<GeneratePromptRequest>,
) -> Result<Json<SubmissionResponse>, (axum::http::StatusCode, String)> {
    let submission = state
        .generation_service
        .submit(payload.into())
        .await
        .map_err(error_response)?;

    Ok(Json(SubmissionResponse {
        results_url: format!("/api/results/{}", submission.session_key),
        session_key: submission.session_key,
        result: submission.result.into(),
        stats: submission.stats.map(Into::into),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/prompts", post(submit_prompt))
}
