//! Application state module

use std::{fmt, sync::Arc};

use crate::domain::communication::mailer::Mailer;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// The API key callers must present
    pub api_key: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Global application state
#[derive(Clone)]
pub struct AppState<M: Mailer> {
    /// The application configuration
    pub config: AppConfig,

    /// Mailer
    pub mailer: Arc<M>,
}

impl<M> AppState<M>
where
    M: Mailer,
{
    /// Create a new application state
    pub fn new(config: AppConfig, mailer: M) -> Self {
        Self {
            config,
            mailer: Arc::new(mailer),
        }
    }
}

impl<M> fmt::Debug for AppState<M>
where
    M: Mailer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("mailer", &"Mailer")
            .finish()
    }
}
