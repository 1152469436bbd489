//! Email provider implementations

pub mod postmark;
