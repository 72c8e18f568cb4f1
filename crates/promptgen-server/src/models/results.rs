//! Results view DTOs

use promptgen::application::ResultsView;
use promptgen::domain::{share_text, ParsedSection, PromptAnalytics};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::EnhancedPromptResponse;

/// Share payload for `GET /api/results`
#[derive(Debug, Deserialize, IntoParams)]
pub struct SharedResultQuery {
    /// URL-encoded result JSON
    pub data: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub word_count: usize,
    pub char_count: usize,
    pub section_count: usize,
    pub optimized_for: String,
    pub complexity_label: String,
    pub category_label: String,
}

impl From<PromptAnalytics> for AnalyticsResponse {
    fn from(a: PromptAnalytics) -> Self {
        Self {
            word_count: a.word_count,
            char_count: a.char_count,
            section_count: a.section_count,
            optimized_for: a.optimized_for,
            complexity_label: a.complexity_label,
            category_label: a.category_label,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SectionResponse {
    pub title: String,
    pub content: String,
}

impl From<ParsedSection> for SectionResponse {
    fn from(s: ParsedSection) -> Self {
        Self {
            title: s.title,
            content: s.content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultsResponse {
    pub result: EnhancedPromptResponse,
    pub analytics: AnalyticsResponse,
    pub sections: Vec<SectionResponse>,
    pub share_text: String,
}

impl From<ResultsView> for ResultsResponse {
    fn from(view: ResultsView) -> Self {
        Self {
            share_text: share_text(&view.result),
            result: view.result.into(),
            analytics: view.analytics.into(),
            sections: view.sections.into_iter().map(Into::into).collect(),
        }
    }
}
