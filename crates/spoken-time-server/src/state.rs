//! Shared application state.

use crate::config::{validate_config, ServerConfig};
use crate::services::SpokenTimeService;
use anyhow::{anyhow, Result};
use spoken_time_core::{BatchParser, FormatterRegistry};
use std::sync::Arc;

/// State handed to every handler. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub spoken_time: SpokenTimeService,
}

impl AppState {
    /// Build state from a configuration, rejecting invalid settings.
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let mut registry = FormatterRegistry::new();

        if let Err(errors) = validate_config(config, &registry) {
            let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
            return Err(anyhow!("Invalid configuration: {}", details.join("; ")));
        }

        registry.set_default(&config.formatter.default_locale)?;
        let batch = BatchParser::new().with_max_times(config.limits.max_batch_size);

        Ok(Self {
            config: Arc::new(config.clone()),
            spoken_time: SpokenTimeService::new(registry, batch),
        })
    }
}
