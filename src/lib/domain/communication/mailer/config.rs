//! Context configuration

#[cfg(test)]
use mockall::mock;

/// The key holding the provider's server token
pub const POSTMARK_SERVER_TOKEN: &str = "POSTMARK-SERVER-TOKEN";

/// Read-only, process-wide configuration properties
pub trait ContextConfig: Send + Sync + 'static {
    /// Get a property by key
    fn get(&self, key: &str) -> Option<String>;
}

#[cfg(test)]
mock! {
    pub ContextConfig {}

    impl ContextConfig for ContextConfig {
        fn get(&self, key: &str) -> Option<String>;
    }
}
