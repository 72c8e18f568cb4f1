//! PromptForm / PromptRequest - Raw form input and its validated form

use serde::{Deserialize, Serialize};

use crate::domain::{AiModel, Category, ComplexityLevel, ValidationError, MIN_PROMPT_CHARS};

/// Raw form submission, exactly as a user typed or selected it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptForm {
    #[serde(default)]
    pub user_prompt: String,
    #[serde(default)]
    pub ai_model: Option<String>,
    #[serde(default)]
    pub prompt_type: Option<String>,
    #[serde(default = "default_complexity")]
    pub complexity_level: i64,
}

fn default_complexity() -> i64 {
    ComplexityLevel::DEFAULT as i64
}

impl PromptForm {
    pub fn new(
        user_prompt: impl Into<String>,
        ai_model: Option<String>,
        prompt_type: Option<String>,
        complexity_level: i64,
    ) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            ai_model,
            prompt_type,
            complexity_level,
        }
    }

    /// Validate the form, checking text presence, text length, then category.
    ///
    /// An empty model selection means `general`.
    pub fn validate(&self) -> Result<PromptRequest, ValidationError> {
        let text = self.user_prompt.trim();

        if text.is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }

        // Length in UTF-16 code units, as browsers measure form input
        if text.encode_utf16().count() < MIN_PROMPT_CHARS {
            return Err(ValidationError::PromptTooShort {
                min: MIN_PROMPT_CHARS,
            });
        }

        let category = match self.prompt_type.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Category::from_id_lossy(id),
            _ => return Err(ValidationError::MissingCategory),
        };

        let model = self
            .ai_model
            .as_deref()
            .map(AiModel::from_id_lossy)
            .unwrap_or_default();

        Ok(PromptRequest {
            original_text: text.to_string(),
            model,
            category,
            complexity: ComplexityLevel::from_raw_lossy(self.complexity_level),
        })
    }
}

/// Validated request consumed by the enhancer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub original_text: String,
    pub model: AiModel,
    pub category: Category,
    pub complexity: ComplexityLevel,
}
