//! Context configuration properties

use std::collections::HashMap;

use crate::domain::communication::mailer::{ContextConfig, POSTMARK_SERVER_TOKEN};

use super::email::postmark::PostmarkConfig;

/// In-memory configuration properties, populated once at startup
#[derive(Clone, Debug, Default)]
pub struct ContextProperties {
    properties: HashMap<String, String>,
}

impl ContextProperties {
    /// Create an empty set of properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key.to_string(), value.to_string());
        self
    }
}

impl ContextConfig for ContextProperties {
    fn get(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }
}

impl From<&PostmarkConfig> for ContextProperties {
    fn from(config: &PostmarkConfig) -> Self {
        Self::new().with(POSTMARK_SERVER_TOKEN, &config.server_token)
    }
}
