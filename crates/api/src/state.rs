use std::sync::Arc;

use store_core::token::{ThreadRngTokenSource, TokenSource};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (everything is behind `Arc`) and immutable once
/// built; handlers never write to it.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, including the reported service metadata.
    pub config: Arc<ServerConfig>,
    /// Access token source used by the pseudo-login handler.
    pub tokens: Arc<dyn TokenSource>,
}

impl AppState {
    /// State with the production thread-RNG token source.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_token_source(config, Arc::new(ThreadRngTokenSource))
    }

    pub fn with_token_source(config: ServerConfig, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            config: Arc::new(config),
            tokens,
        }
    }
}
