//! Email address errors

use thiserror::Error;

/// An error that can occur when parsing an email address
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailAddressError {
    /// No email could be extracted from the text
    #[error("email address could not be parsed")]
    Unparseable,
}
