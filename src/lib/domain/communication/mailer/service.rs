//! Mail relay service

use std::{fmt, sync::Arc};

use anyhow::anyhow;
use async_trait::async_trait;
use tracing::{debug, warn};

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::email_addresses::{parse_many, parse_one};

use super::{
    ContextConfig, EmailTransport, MailerError, Message, ProviderPayload, POSTMARK_SERVER_TOKEN,
};

/// Sends email messages
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `message` - The [`Message`] to send.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] once the provider has accepted the message.
    async fn send_email(&self, message: &Message) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_email(&self, message: &Message) -> Result<(), MailerError>;
    }
}

/// [`Mailer`] that relays each message to the provider in a single request
pub struct MailRelay<C, T>
where
    C: ContextConfig,
    T: EmailTransport,
{
    config: Arc<C>,
    transport: Arc<T>,
}

impl<C, T> MailRelay<C, T>
where
    C: ContextConfig,
    T: EmailTransport,
{
    /// Creates a new mail relay.
    pub fn new(config: Arc<C>, transport: Arc<T>) -> Self {
        Self { config, transport }
    }
}

impl<C, T> Clone for MailRelay<C, T>
where
    C: ContextConfig,
    T: EmailTransport,
{
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<C, T> fmt::Debug for MailRelay<C, T>
where
    C: ContextConfig,
    T: EmailTransport,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailRelay")
            .field("config", &"ContextConfig")
            .field("transport", &"EmailTransport")
            .finish()
    }
}

#[async_trait]
impl<C, T> Mailer for MailRelay<C, T>
where
    C: ContextConfig,
    T: EmailTransport,
{
    async fn send_email(&self, message: &Message) -> Result<(), MailerError> {
        let message = message.validate()?;

        let from = parse_one(message.from)?;
        let to = parse_many(message.to)?;

        let token = self
            .config
            .get(POSTMARK_SERVER_TOKEN)
            .ok_or_else(|| anyhow!("{POSTMARK_SERVER_TOKEN} is not configured"))?;

        let payload = ProviderPayload::new(&message, &from, &to);

        debug!(to = %payload.to, "sending email");

        let response = match self.transport.post_email(&token, &payload).await {
            Ok(response) => response,
            Err(err) => {
                warn!("could not reach the email provider: {err:#}");
                return Err(MailerError::Upstream("Unknown".to_string()));
            }
        };

        if response.is_success() {
            return Ok(());
        }

        warn!(status = response.status, "email provider rejected the message");

        if response.body.is_empty() {
            Err(MailerError::Upstream("Unknown".to_string()))
        } else {
            Err(MailerError::Upstream(response.body))
        }
    }
}
