//! Stats Routes - Usage counters

use axum::{extract::State, routing::get, Json, Router};

use crate::models::StatsResponse;
use crate::AppState;

/// Current usage counters
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Current stats", body = StatsResponse)
    ),
    tag = "Stats"
)]
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.stats_service.load().await.into())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/stats", get(get_stats))
}
