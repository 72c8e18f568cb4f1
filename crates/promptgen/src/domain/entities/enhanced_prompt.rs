//! EnhancedPromptResult - One generated prompt, as handed to the results view

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AiModel, Category, ComplexityLevel, PromptRequest};

/// Result of a single submission
///
/// Serialized with the camelCase field names used by session storage and
/// share links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedPromptResult {
    #[serde(default)]
    pub original: String,
    pub enhanced: String,
    #[serde(default)]
    pub ai_model: AiModel,
    #[serde(default)]
    pub prompt_type: Category,
    #[serde(default)]
    pub complexity_level: ComplexityLevel,
    #[serde(default = "Utc::now")]
    pub generated_at: DateTime<Utc>,
}

impl EnhancedPromptResult {
    pub fn new(request: &PromptRequest, enhanced: String) -> Self {
        Self::new_at(request, enhanced, Utc::now())
    }

    pub fn new_at(request: &PromptRequest, enhanced: String, generated_at: DateTime<Utc>) -> Self {
        Self {
            original: request.original_text.clone(),
            enhanced,
            ai_model: request.model,
            prompt_type: request.category,
            complexity_level: request.complexity,
            generated_at,
        }
    }
}
