//! Catalog DTOs

use promptgen::{category_spec, complexity_spec, model_spec, AiModel, Category, ComplexityLevel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub style_description: String,
    pub key_features: Vec<String>,
    pub response_format: String,
    pub token_limit: u32,
    pub temperature: f32,
}

impl From<AiModel> for ModelInfo {
    fn from(model: AiModel) -> Self {
        let spec = model_spec(model);
        Self {
            id: model.id().to_string(),
            name: model.short_name().to_string(),
            display_name: spec.display_name.to_string(),
            style_description: spec.style_description.to_string(),
            key_features: spec.key_features.iter().map(|f| f.to_string()).collect(),
            response_format: spec.response_format.to_string(),
            token_limit: spec.token_limit,
            temperature: spec.temperature,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: String,
    pub display_name: String,
    /// Empty for categories without guidance (`other`)
    pub key_elements: Vec<String>,
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        Self {
            id: category.id().to_string(),
            display_name: category.display_name().to_string(),
            key_elements: category_spec(category)
                .map(|spec| spec.key_elements.iter().map(|e| e.to_string()).collect())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityInfo {
    pub level: u8,
    pub display_name: String,
    pub description: String,
    pub section_count: u8,
    pub word_min: u32,
    pub word_max: u32,
    pub detail_level: String,
}

impl From<ComplexityLevel> for ComplexityInfo {
    fn from(level: ComplexityLevel) -> Self {
        let spec = complexity_spec(level);
        Self {
            level: level.value(),
            display_name: spec.display_name.to_string(),
            description: spec.description.to_string(),
            section_count: spec.section_count,
            word_min: spec.word_range.0,
            word_max: spec.word_range.1,
            detail_level: spec.detail_level.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogResponse {
    pub models: Vec<ModelInfo>,
    pub categories: Vec<CategoryInfo>,
    pub levels: Vec<ComplexityInfo>,
}
