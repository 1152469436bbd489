//! Recipient lists

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{parse_one, EmailAddressError, ParsedAddress};

/// One or more recipient strings, each of which may hold a `,` or `;` separated list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Recipients {
    /// A single string
    One(String),

    /// A list of strings
    Many(Vec<String>),
}

impl Recipients {
    /// Returns `true` if there is nothing to send to
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(text) => text.is_empty(),
            Self::Many(list) => list.is_empty(),
        }
    }

    fn as_slice(&self) -> &[String] {
        match self {
            Self::One(text) => std::slice::from_ref(text),
            Self::Many(list) => list,
        }
    }
}

impl From<&str> for Recipients {
    fn from(text: &str) -> Self {
        Self::One(text.to_string())
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(list: Vec<&str>) -> Self {
        Self::Many(list.into_iter().map(str::to_string).collect())
    }
}

/// Split every recipient string on `,` and `;` and parse each trimmed token in order.
///
/// Empty tokens are not skipped, so a trailing separator fails the whole list.
///
/// # Errors
/// The first [`EmailAddressError`] returned by [`parse_one`].
pub fn parse_many(recipients: &Recipients) -> Result<Vec<ParsedAddress>, EmailAddressError> {
    recipients
        .as_slice()
        .iter()
        .flat_map(|text| text.split([',', ';']).map(str::trim))
        .map(parse_one)
        .collect()
}
