//! Stats Repository Port
//!
//! Persistent slot for the single usage-counter record.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, StatsRecord};

/// Storage key of the stats record
pub const STATS_KEY: &str = "simulatedStats";

/// Repository interface for the stats record
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Load the stored record, `None` when nothing has been stored yet
    async fn load(&self) -> Result<Option<StatsRecord>, DomainError>;

    /// Overwrite the stored record
    async fn save(&self, stats: &StatsRecord) -> Result<(), DomainError>;
}
