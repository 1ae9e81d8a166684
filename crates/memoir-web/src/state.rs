//! Shared read-only application state.
//!
//! The dataset is loaded once before serving and shared across handlers
//! behind an `Arc`. Nothing here mutates after startup, so handlers take
//! no locks.

use std::sync::Arc;

use memoir_core::Result;
use memoir_store::Dataset;

use crate::config::AppConfig;

/// Everything a request handler needs: the immutable dataset plus the
/// configuration it was started with.
#[derive(Debug)]
pub struct AppState {
    dataset: Dataset,
    config: AppConfig,
}

impl AppState {
    /// Load the documents named by the configuration and build the state.
    ///
    /// Fatal on a missing or malformed document — the process cannot
    /// serve without its data.
    pub fn from_config(config: AppConfig) -> Result<Arc<Self>> {
        let dataset = Dataset::load(&config.roster_path, &config.compiled_path)?;
        Ok(Arc::new(Self { dataset, config }))
    }

    /// Build state from an already-loaded dataset.
    pub fn from_parts(dataset: Dataset, config: AppConfig) -> Arc<Self> {
        Arc::new(Self { dataset, config })
    }

    /// The loaded dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
