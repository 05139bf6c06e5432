use crate::error::{DemoError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Knobs for a full demo run. Every field has a default, so a partial TOML
/// document only overrides what it names.
///
/// The `concurrency_demos` binary has no configuration surface and always
/// runs with [`DemoConfig::default`]. TOML loading is library-only API for
/// callers (and tests) that drive [`crate::demos::run_all`] themselves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub sequence_length: u64,
    pub pause_ms: u64,
    pub counter_workers: usize,
    pub increments_per_worker: u64,
    pub list_workers: usize,
    pub bank_clients: usize,
    pub transactions_per_client: usize,
    pub max_amount: u32,
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sequence_length: 10,
            pause_ms: 100,
            counter_workers: 3,
            increments_per_worker: 100,
            list_workers: 3,
            bank_clients: 3,
            transactions_per_client: 10,
            max_amount: 100,
            seed: None,
        }
    }
}

/// Printer indices are `u32` so their squares always fit in a `u64`.
pub const MAX_SEQUENCE_LENGTH: u64 = u32::MAX as u64;

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        // gen_range panics on an empty range
        if self.max_amount == 0 {
            return Err(DemoError::invalid_config(
                "max_amount",
                "must be greater than zero",
            ));
        }
        self.sequence_len()?;
        Ok(())
    }

    /// `sequence_length` narrowed to the printers' index type.
    pub fn sequence_len(&self) -> Result<u32> {
        u32::try_from(self.sequence_length).map_err(|_| {
            DemoError::invalid_config(
                "sequence_length",
                format!("must be at most {}", MAX_SEQUENCE_LENGTH),
            )
        })
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}
