//! Relaying messages to the transactional email provider

mod config;
mod errors;
mod message;
mod payload;
mod service;
mod transport;

pub use config::{ContextConfig, POSTMARK_SERVER_TOKEN};
pub use errors::MailerError;
pub use message::{Message, ValidMessage};
pub use payload::{ProviderPayload, MESSAGE_STREAM};
pub use service::{MailRelay, Mailer};
pub use transport::{EmailTransport, ProviderResponse};

#[cfg(test)]
pub mod tests {
    pub use super::config::MockContextConfig;
    pub use super::service::MockMailer;
    pub use super::transport::MockEmailTransport;
}
