//! Email message

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::communication::email_addresses::Recipients;

use super::MailerError;

/// An email message as submitted by a caller
///
/// Every field is optional on the wire, [`Message::validate`] decides what is required.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// The sender, `Name <email>` or a bare email
    #[schema(example = "Jane Doe <jane@example.com>")]
    pub from: Option<String>,

    /// The recipients, a string or a list of strings separated by `,` or `;`
    #[schema(example = "bob@example.com, carol@example.com")]
    pub to: Option<Recipients>,

    /// The subject of the email
    #[schema(example = "Hello")]
    pub subject: Option<String>,

    /// The plain text body of the email
    pub body_text: Option<String>,

    /// The HTML body of the email
    pub body_html: Option<String>,
}

/// A [`Message`] that has passed validation, with its required fields resolved
#[derive(Debug, PartialEq, Eq)]
pub struct ValidMessage<'a> {
    /// The sender
    pub from: &'a str,

    /// The recipients
    pub to: &'a Recipients,

    /// The subject, untrimmed
    pub subject: &'a str,

    /// The plain text body
    pub body_text: Option<&'a str>,

    /// The HTML body
    pub body_html: Option<&'a str>,
}

impl Message {
    /// Checks that the sender, recipients and subject are present and that there is at least
    /// one body. Empty strings count as missing.
    ///
    /// # Errors
    /// [`MailerError::MissingRequiredProperties`] if anything is missing.
    pub fn validate(&self) -> Result<ValidMessage<'_>, MailerError> {
        let from = non_empty(&self.from).ok_or(MailerError::MissingRequiredProperties)?;

        let to = self
            .to
            .as_ref()
            .filter(|to| !to.is_empty())
            .ok_or(MailerError::MissingRequiredProperties)?;

        let subject = non_empty(&self.subject).ok_or(MailerError::MissingRequiredProperties)?;

        if non_empty(&self.body_text).is_none() && non_empty(&self.body_html).is_none() {
            return Err(MailerError::MissingRequiredProperties);
        }

        Ok(ValidMessage {
            from,
            to,
            subject,
            body_text: self.body_text.as_deref(),
            body_html: self.body_html.as_deref(),
        })
    }
}

impl TryFrom<Value> for Message {
    type Error = MailerError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err(MailerError::MissingRequiredProperties);
        }

        serde_json::from_value(value).map_err(|_| MailerError::MissingRequiredProperties)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
