//! Outbound email: address parsing and relaying messages to the provider.

pub mod email_addresses;
pub mod mailer;
