use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use promptgen::adapters::{JsonFileResultRepository, JsonFileStatsRepository, StatsSeed};
use promptgen::application::{GenerationService, ResultsService, StatsService};

mod config;
mod models;
mod routes;

use config::ServerConfig;

/// Type aliases for application services with concrete repository implementations
pub type AppStatsService = StatsService<JsonFileStatsRepository, StatsSeed>;
pub type AppGenerationService =
    GenerationService<JsonFileResultRepository, JsonFileStatsRepository, StatsSeed>;
pub type AppResultsService = ResultsService<JsonFileResultRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub stats_service: Arc<AppStatsService>,
    pub generation_service: Arc<AppGenerationService>,
    pub results_service: Arc<AppResultsService>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        let stats_repo = Arc::new(JsonFileStatsRepository::new(&config.data_dir));
        let result_repo = Arc::new(JsonFileResultRepository::new(&config.data_dir));
        let seed = Arc::new(
            config
                .stats_seed
                .clone()
                .map(StatsSeed::File)
                .unwrap_or_default(),
        );

        let stats_service = Arc::new(StatsService::new(stats_repo, seed));
        let generation_service = Arc::new(GenerationService::new(
            result_repo.clone(),
            stats_service.clone(),
            config.generation_delay,
        ));
        let results_service = Arc::new(ResultsService::new(result_repo));

        Self {
            stats_service,
            generation_service,
            results_service,
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "promptgen API is running - short prompts in, structured prompts out"
            .to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full router with shared state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(routes::swagger::router())
        .merge(routes::prompt::router())
        .merge(routes::results::router())
        .merge(routes::stats::router())
        .merge(routes::catalog::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("promptgen=info,promptgen_server=info,tower_http=info")
            }),
        )
        .init();

    tracing::info!("🪄 promptgen API initializing...");

    let config = ServerConfig::from_env().context("Failed to read server configuration")?;

    tracing::info!("📁 Data directory: {}", config.data_dir.display());
    match &config.stats_seed {
        Some(path) => tracing::info!("🌱 Stats seed: {}", path.display()),
        None => tracing::info!("🌱 Stats seed: built-in"),
    }
    if config.generation_delay.is_zero() {
        tracing::warn!("⚠️  Generation delay disabled");
    }

    let state = AppState::new(&config);
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("📚 OpenAPI: /api-docs/openapi.json");
    tracing::info!("✅ promptgen API ready on {}", config.bind_addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    fn app(dir: &tempfile::TempDir) -> Router {
        let config = ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            data_dir: dir.path().to_path_buf(),
            stats_seed: None,
            generation_delay: Duration::ZERO,
        };
        build_router(AppState::new(&config))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(&app(&dir), get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_submit_then_view_and_download() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir);

        let (status, body) = send(
            &app,
            post_json(
                "/api/prompts",
                json!({
                    "userPrompt": "Write a story about a dragon who learns to fly",
                    "aiModel": "general",
                    "promptType": "creative",
                    "complexityLevel": 1
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let submission: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            submission["result"]["enhanced"],
            "**System Instructions:** Provide a comprehensive and helpful response.\n\n**Primary Task:** Write a story about a dragon who learns to fly"
        );
        assert_eq!(submission["stats"]["totalPromptsGenerated"], 1248);

        let results_url = submission["resultsUrl"].as_str().unwrap();
        let (status, body) = send(&app, get(results_url)).await;
        assert_eq!(status, StatusCode::OK);
        let view: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(view["analytics"]["sectionCount"], 2);
        assert_eq!(view["analytics"]["complexityLabel"], "Basic");
        assert_eq!(view["sections"][1]["title"], "Primary Task:");

        let (status, body) = send(&app, get(&format!("{}/download", results_url))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("AI PROMPT GENERATOR PRO - ENHANCED PROMPT\n"));
        assert!(body.contains("- Category: Creative Writing\n"));

        let (_, body) = send(&app, get("/api/stats")).await;
        let stats: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(stats["totalPromptsGenerated"], 1248);
    }

    #[tokio::test]
    async fn test_validation_errors_are_bad_requests() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir);

        let (status, body) = send(
            &app,
            post_json(
                "/api/prompts",
                json!({ "userPrompt": "123456789", "promptType": "code" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            "Please enter a more detailed prompt (at least 10 characters)."
        );

        let (status, body) = send(
            &app,
            post_json("/api/prompts", json!({ "userPrompt": "Plan a garden layout" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Please select a prompt category.");

        // Nothing was counted
        let (_, body) = send(&app, get("/api/stats")).await;
        let stats: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(stats["totalPromptsGenerated"], 1247);
    }

    #[tokio::test]
    async fn test_shared_result() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir);

        let shared = json!({
            "original": "Sketch a cat",
            "enhanced": "**Primary Task:** Sketch a cat",
            "aiModel": "midjourney",
            "promptType": "image",
            "complexityLevel": 2,
            "generatedAt": "2024-01-01T00:00:00Z"
        });
        let uri = format!(
            "/api/results?data={}",
            urlencoding::encode(&shared.to_string())
        );

        let (status, body) = send(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        let view: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(view["analytics"]["optimizedFor"], "Midjourney");
        assert_eq!(view["analytics"]["categoryLabel"], "Image Generation");
        assert!(view["shareText"]
            .as_str()
            .unwrap()
            .ends_with("**Primary Task:** Sketch a cat..."));
    }

    #[tokio::test]
    async fn test_missing_results_are_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir);

        let (status, body) = send(&app, get("/api/results/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "No prompt data found.");

        let (status, _) = send(&app, get("/api/results")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, get("/api/results/nope/download")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_catalog_and_openapi() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir);

        let (status, body) = send(&app, get("/api/catalog")).await;
        assert_eq!(status, StatusCode::OK);
        let catalog: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(catalog["models"].as_array().unwrap().len(), 10);
        assert_eq!(catalog["categories"].as_array().unwrap().len(), 10);
        assert_eq!(catalog["levels"][4]["sectionCount"], 8);

        let (status, body) = send(&app, get("/api-docs/openapi.json")).await;
        assert_eq!(status, StatusCode::OK);
        let doc: Value = serde_json::from_str(&body).unwrap();
        assert!(doc["paths"]["/api/prompts"].is_object());
    }
}
