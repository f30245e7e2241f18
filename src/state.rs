// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::upstream::UpstreamClient;

pub type SharedState = Arc<AppState>;

/// Read-only after startup; every request borrows it.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let upstream = UpstreamClient::new(&config.upstream_base_url);
        Self { config, upstream }
    }

    pub fn shared(config: Config) -> SharedState {
        Arc::new(Self::new(config))
    }
}
