//! Stats Seed Port
//!
//! Read-only source of the initial stats record.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, StatsRecord};

/// Source of the record used before anything has been persisted
#[async_trait]
pub trait StatsSeedSource: Send + Sync {
    /// Fetch the seed record
    async fn fetch(&self) -> Result<StatsRecord, DomainError>;
}
