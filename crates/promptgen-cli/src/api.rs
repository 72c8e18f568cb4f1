//! promptgen API Client

use anyhow::{bail, Context, Result};
use promptgen::{EnhancedPromptResult, PromptForm, StatsRecord};
use reqwest::{Client, Response};
use serde::Deserialize;

/// API Client for promptgen-server
pub struct PromptgenClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub session_key: String,
    pub result: EnhancedPromptResult,
    pub stats: Option<StatsRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ResultsResponse {
    pub result: EnhancedPromptResult,
}

impl PromptgenClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Submit a form; validation failures come back as the server's message
    pub async fn submit(&self, form: &PromptForm) -> Result<SubmissionResponse> {
        let url = format!("{}/api/prompts", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(form)
            .send()
            .await
            .context("Failed to connect to promptgen API")?;

        Self::parse(resp).await
    }

    /// Current usage counters
    pub async fn stats(&self) -> Result<StatsRecord> {
        let url = format!("{}/api/stats", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to promptgen API")?;

        Self::parse(resp).await
    }

    /// Result stored on the server for a session
    pub async fn result(&self, session_key: &str) -> Result<EnhancedPromptResult> {
        let url = format!("{}/api/results/{}", self.base_url, session_key);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to promptgen API")?;

        let view: ResultsResponse = Self::parse(resp).await?;
        Ok(view.result)
    }

    async fn parse<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T> {
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            if status.is_client_error() && !body.is_empty() {
                bail!("{}", body);
            }
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }
}
