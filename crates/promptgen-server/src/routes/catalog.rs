//! Catalog Routes - What the form can offer

use axum::{routing::get, Json, Router};
use promptgen::{AiModel, Category, ComplexityLevel};

use crate::models::CatalogResponse;
use crate::AppState;

/// Models, categories and complexity levels
#[utoipa::path(
    get,
    path = "/api/catalog",
    responses(
        (status = 200, description = "Static catalog", body = CatalogResponse)
    ),
    tag = "Catalog"
)]
pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        models: AiModel::ALL.into_iter().map(Into::into).collect(),
        categories: Category::ALL.into_iter().map(Into::into).collect(),
        levels: ComplexityLevel::all().map(Into::into).collect(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/catalog", get(get_catalog))
}
