//! Adapters for the outside world: configuration, the email provider and the HTTP API

pub mod config;
pub mod email;
pub mod http;
