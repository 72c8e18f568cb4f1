//! Prompt submission DTOs

use chrono::{DateTime, Utc};
use promptgen::{ComplexityLevel, EnhancedPromptResult, PromptForm};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::StatsResponse;

/// Form submission
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePromptRequest {
    /// Text to enhance, at least 10 characters after trimming
    #[serde(default)]
    pub user_prompt: String,
    /// Model id; empty or absent means `general`
    pub ai_model: Option<String>,
    /// Category id
    pub prompt_type: Option<String>,
    /// Slider value 1-5; anything else means 3
    pub complexity_level: Option<i64>,
}

impl From<GeneratePromptRequest> for PromptForm {
    fn from(req: GeneratePromptRequest) -> Self {
        PromptForm::new(
            req.user_prompt,
            req.ai_model,
            req.prompt_type,
            req.complexity_level
                .unwrap_or(ComplexityLevel::DEFAULT as i64),
        )
    }
}

/// Generated result, in the session-store shape
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedPromptResponse {
    pub original: String,
    pub enhanced: String,
    pub ai_model: String,
    pub prompt_type: String,
    pub complexity_level: u8,
    pub generated_at: DateTime<Utc>,
}

impl From<EnhancedPromptResult> for EnhancedPromptResponse {
    fn from(result: EnhancedPromptResult) -> Self {
        Self {
            original: result.original,
            enhanced: result.enhanced,
            ai_model: result.ai_model.id().to_string(),
            prompt_type: result.prompt_type.id().to_string(),
            complexity_level: result.complexity_level.value(),
            generated_at: result.generated_at,
        }
    }
}

/// Response to a successful submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub session_key: String,
    /// Where the results view for this submission lives
    pub results_url: String,
    pub result: EnhancedPromptResponse,
    pub stats: Option<StatsResponse>,
}
