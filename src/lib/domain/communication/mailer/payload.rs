//! Provider request body

use serde::Serialize;

use crate::domain::communication::email_addresses::ParsedAddress;

use super::ValidMessage;

/// The message stream every email is sent through
pub const MESSAGE_STREAM: &str = "outbound";

/// The JSON body of a send request
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderPayload {
    /// `Name <email>` or a bare email
    pub from: String,

    /// Comma separated bare emails
    pub to: String,

    /// The trimmed subject
    pub subject: String,

    /// The plain text body, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_body: Option<String>,

    /// The HTML body, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,

    /// Always [`MESSAGE_STREAM`]
    pub message_stream: String,
}

impl ProviderPayload {
    /// Build the payload for a validated message and its parsed addresses
    pub fn new(message: &ValidMessage<'_>, from: &ParsedAddress, to: &[ParsedAddress]) -> Self {
        Self {
            from: from.to_string(),
            to: to
                .iter()
                .map(|address| address.email.as_str())
                .collect::<Vec<_>>()
                .join(","),
            subject: message.subject.trim().to_string(),
            text_body: message.body_text.map(str::to_string),
            html_body: message.body_html.map(str::to_string),
            message_stream: MESSAGE_STREAM.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;
    use crate::domain::communication::email_addresses::Recipients;

    #[test]
    fn test_payload_json() -> TestResult {
        let to = Recipients::from("Bob <b@x.com>; c@x.com");
        let message = ValidMessage {
            from: "Jane Doe <a@x.com>",
            to: &to,
            subject: "  Hi ",
            body_text: Some("hi"),
            body_html: None,
        };

        let payload = ProviderPayload::new(
            &message,
            &ParsedAddress::new(Some("Jane Doe"), "a@x.com"),
            &[
                ParsedAddress::new(Some("Bob"), "b@x.com"),
                ParsedAddress::new(None, "c@x.com"),
            ],
        );

        assert_eq!(
            serde_json::to_value(&payload)?,
            json!({
                "From": "Jane Doe <a@x.com>",
                "To": "b@x.com,c@x.com",
                "Subject": "Hi",
                "TextBody": "hi",
                "MessageStream": "outbound",
            })
        );

        Ok(())
    }
}
