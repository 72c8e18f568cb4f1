//! Server configuration from environment variables
//!
//! - `PROMPTGEN_BIND_ADDR`: listen address (default `0.0.0.0:8000`)
//! - `PROMPTGEN_DATA_DIR`: stats and session files (default `./data`)
//! - `PROMPTGEN_STATS_SEED`: external stats seed file (default: built-in seed)
//! - `PROMPTGEN_GENERATION_DELAY_MS`: simulated processing time (default 2000)

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_GENERATION_DELAY_MS: u64 = 2000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub stats_seed: Option<PathBuf>,
    pub generation_delay: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_raw = get("PROMPTGEN_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "PROMPTGEN_BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let generation_delay = match get("PROMPTGEN_GENERATION_DELAY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid {
                    name: "PROMPTGEN_GENERATION_DELAY_MS",
                    value: raw.clone(),
                })?,
            None => DEFAULT_GENERATION_DELAY_MS,
        };

        Ok(Self {
            bind_addr,
            data_dir: get("PROMPTGEN_DATA_DIR")
                .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())
                .into(),
            stats_seed: get("PROMPTGEN_STATS_SEED").map(PathBuf::from),
            generation_delay: Duration::from_millis(generation_delay),
        })
    }
}
