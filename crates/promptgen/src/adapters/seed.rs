//! Stats seed sources

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::{DomainError, StatsRecord};
use crate::ports::StatsSeedSource;

const EMBEDDED_SEED: &str = include_str!("../../data/stats.json");

/// Where the initial stats record comes from
#[derive(Debug, Clone, Default)]
pub enum StatsSeed {
    /// JSON file on disk
    File(PathBuf),
    /// Copy of `data/stats.json` compiled into the library
    #[default]
    Embedded,
}

#[async_trait]
impl StatsSeedSource for StatsSeed {
    async fn fetch(&self) -> Result<StatsRecord, DomainError> {
        match self {
            StatsSeed::File(path) => {
                let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
                    DomainError::Repository(format!(
                        "failed to read stats seed {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                Ok(serde_json::from_str(&raw)?)
            }
            StatsSeed::Embedded => Ok(serde_json::from_str(EMBEDDED_SEED)?),
        }
    }
}
