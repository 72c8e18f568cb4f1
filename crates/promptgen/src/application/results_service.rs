//! Results Application Service (Use Case)
//!
//! Locates the result to display and derives everything the results view
//! shows for it.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{
    decode_shared, parse_sections, DomainError, EnhancedPromptResult, ParsedSection,
    PromptAnalytics,
};
use crate::ports::ResultRepository;

/// A result together with its derived analytics and sections
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView {
    pub result: EnhancedPromptResult,
    pub analytics: PromptAnalytics,
    pub sections: Vec<ParsedSection>,
}

impl ResultsView {
    pub fn new(result: EnhancedPromptResult) -> Self {
        Self {
            analytics: PromptAnalytics::from_result(&result),
            sections: parse_sections(&result.enhanced),
            result,
        }
    }
}

/// Application service for the results view
pub struct ResultsService<R: ResultRepository> {
    repo: Arc<R>,
}

impl<R: ResultRepository> ResultsService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Session store first, then a shared `data` payload.
    ///
    /// `Ok(None)` when neither yields a result.
    pub async fn load(
        &self,
        session_key: Option<&str>,
        shared_data: Option<&str>,
    ) -> Result<Option<ResultsView>, DomainError> {
        if let Some(key) = session_key {
            match self.repo.find(key).await {
                Ok(Some(result)) => return Ok(Some(ResultsView::new(result))),
                Ok(None) => {}
                Err(e) => tracing::warn!("Session result unreadable for {}: {}", key, e),
            }
        }

        if let Some(data) = shared_data {
            match decode_shared(data) {
                Ok(result) => return Ok(Some(ResultsView::new(result))),
                Err(e) => tracing::warn!("Shared result payload rejected: {}", e),
            }
        }

        Ok(None)
    }

    /// Like [`Self::load`], but absence is `DomainError::NotFound`
    pub async fn get(
        &self,
        session_key: Option<&str>,
        shared_data: Option<&str>,
    ) -> Result<ResultsView, DomainError> {
        self.load(session_key, shared_data).await?.ok_or_else(|| {
            DomainError::not_found("EnhancedPromptResult", session_key.unwrap_or("shared"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryResultRepository;
    use crate::domain::{enhance, share_query, PromptForm};

    fn result(text: &str) -> EnhancedPromptResult {
        let request = PromptForm::new(text, Some("gemini".into()), Some("research".into()), 4)
            .validate()
            .unwrap();
        EnhancedPromptResult::new(&request, enhance(&request))
    }

    #[tokio::test]
    async fn test_session_store_wins() {
        let repo = Arc::new(InMemoryResultRepository::new());
        let stored = result("Compare three database engines");
        repo.save("abc", &stored).await.unwrap();

        let shared = share_query(&result("Something else entirely")).unwrap();
        let view = ResultsService::new(repo)
            .load(Some("abc"), Some(&shared))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(view.result, stored);
        assert_eq!(view.analytics.section_count, view.sections.len());
        assert_eq!(view.analytics.optimized_for, "Gemini");
        assert_eq!(view.analytics.complexity_label, "Expert");
    }

    #[tokio::test]
    async fn test_falls_back_to_shared_payload() {
        let service = ResultsService::new(Arc::new(InMemoryResultRepository::new()));
        let shared_result = result("Survey recent work on type inference");
        let shared = share_query(&shared_result).unwrap();

        let view = service
            .load(Some("missing"), Some(&shared))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(view.result, shared_result);
    }

    #[tokio::test]
    async fn test_nothing_found() {
        let service = ResultsService::new(Arc::new(InMemoryResultRepository::new()));

        assert!(service.load(None, None).await.unwrap().is_none());
        assert!(service.load(Some("x"), Some("%%%")).await.unwrap().is_none());
        assert!(matches!(
            service.get(Some("x"), None).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
