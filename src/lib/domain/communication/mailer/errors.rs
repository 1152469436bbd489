//! Mailer errors

use thiserror::Error;
use tracing::debug;

use crate::domain::communication::email_addresses::EmailAddressError;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// The message is missing a sender, recipients, subject or body
    #[error("Missing required properties")]
    MissingRequiredProperties,

    /// A sender or recipient address could not be parsed
    #[error("Invalid email address")]
    InvalidAddress,

    /// The provider rejected the message or could not be reached
    #[error("{0}")]
    Upstream(String),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl MailerError {
    /// Returns `true` for errors caused by the submitted message rather than the provider
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::MissingRequiredProperties | Self::InvalidAddress)
    }
}

impl From<EmailAddressError> for MailerError {
    fn from(err: EmailAddressError) -> Self {
        debug!("EmailAddressError -> MailerError");

        match err {
            EmailAddressError::Unparseable => MailerError::InvalidAddress,
        }
    }
}
