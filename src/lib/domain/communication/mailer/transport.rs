//! Outbound transport to the provider

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use super::ProviderPayload;

/// A response received from the provider
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderResponse {
    /// The HTTP status code
    pub status: u16,

    /// The response body, empty if it could not be read
    pub body: String,
}

impl ProviderResponse {
    /// Returns `true` if the provider accepted the message
    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

/// Sends payloads to the provider
#[async_trait]
pub trait EmailTransport: Send + Sync + 'static {
    /// Post a payload to the provider's send endpoint.
    ///
    /// # Arguments
    /// * `token` - The provider server token.
    /// * `payload` - The [`ProviderPayload`] to send.
    ///
    /// # Returns
    /// - [`Ok`] with the [`ProviderResponse`] for any received response, whatever its status.
    /// - [`Err`] if no response was received.
    async fn post_email(
        &self,
        token: &str,
        payload: &ProviderPayload,
    ) -> anyhow::Result<ProviderResponse>;
}

#[cfg(test)]
mock! {
    pub EmailTransport {}

    #[async_trait]
    impl EmailTransport for EmailTransport {
        async fn post_email(&self, token: &str, payload: &ProviderPayload) -> anyhow::Result<ProviderResponse>;
    }
}
