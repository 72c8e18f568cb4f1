//! promptgen API Routes
//!
//! - /api/prompts - Form submission
//! - /api/results - Results view, download
//! - /api/stats - Usage counters
//! - /api/catalog - Models, categories, complexity levels
//! - /api-docs/openapi.json - OpenAPI document

pub mod catalog;
pub mod prompt;
pub mod results;
pub mod stats;
pub mod swagger;

use axum::http::StatusCode;
use promptgen::DomainError;

/// Map a domain error to a status and a message safe to show users
pub(crate) fn error_response(e: DomainError) -> (StatusCode, String) {
    let status = match &e {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        _ => {
            tracing::error!("Request failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, e.user_message())
}
