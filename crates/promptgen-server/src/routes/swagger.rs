//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::models::{
    AnalyticsResponse, CatalogResponse, CategoryInfo, ComplexityInfo, EnhancedPromptResponse,
    GeneratePromptRequest, ModelInfo, ResultsResponse, SectionResponse, StatsResponse,
    SubmissionResponse,
};
use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Prompt endpoints
        super::prompt::submit_prompt,
        // Results endpoints
        super::results::get_result,
        super::results::get_shared_result,
        super::results::download_result,
        // Stats endpoints
        super::stats::get_stats,
        // Catalog endpoints
        super::catalog::get_catalog,
    ),
    info(
        title = "promptgen API",
        version = "0.2.0",
        description = "Turns a short prompt into a structured, model-aware prompt.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Prompt", description = "Prompt - Form submission and enhancement"),
        (name = "Results", description = "Results - Stored or shared results, download"),
        (name = "Stats", description = "Stats - Usage counters"),
        (name = "Catalog", description = "Catalog - Models, categories, complexity levels"),
    ),
    components(
        schemas(
            // Prompt
            GeneratePromptRequest,
            EnhancedPromptResponse,
            SubmissionResponse,
            // Results
            AnalyticsResponse,
            SectionResponse,
            ResultsResponse,
            // Stats
            StatsResponse,
            // Catalog
            ModelInfo,
            CategoryInfo,
            ComplexityInfo,
            CatalogResponse,
        )
    ),
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}
