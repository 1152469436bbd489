//! Parsed email address

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::EmailAddressError;

lazy_static! {
    // Optional display name before `<`, then the email with an optional closing `>`.
    static ref ADDRESS_REGEX: Regex = Regex::new(r"^(?:\s?(.*?)\s*<)?(.*?)>?$").unwrap();
}

/// A display name and email pair taken from free-form address text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedAddress {
    /// The display name, if one was given
    pub name: Option<String>,

    /// The email address
    pub email: String,
}

impl ParsedAddress {
    /// Create a new parsed address
    pub fn new(name: Option<&str>, email: &str) -> Self {
        Self {
            name: name.map(str::to_string),
            email: email.to_string(),
        }
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.email),
            None => write!(f, "{}", self.email),
        }
    }
}

/// Parse a single `Name <email>` or bare email.
///
/// Only the presence of an email is checked, the address syntax itself is not validated.
///
/// # Errors
/// [`EmailAddressError::Unparseable`] when no email can be extracted.
pub fn parse_one(text: &str) -> Result<ParsedAddress, EmailAddressError> {
    let captures = ADDRESS_REGEX
        .captures(text)
        .ok_or(EmailAddressError::Unparseable)?;

    let email = captures
        .get(2)
        .map(|m| m.as_str())
        .filter(|email| !email.is_empty())
        .ok_or(EmailAddressError::Unparseable)?;

    let name = captures
        .get(1)
        .map(|m| m.as_str())
        .filter(|name| !name.is_empty());

    Ok(ParsedAddress::new(name, email))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_parse_name_and_email() -> TestResult {
        let address = parse_one("Jane Doe <jane@example.com>")?;

        assert_eq!(address.name.as_deref(), Some("Jane Doe"));
        assert_eq!(address.email, "jane@example.com");

        Ok(())
    }

    #[test]
    fn test_parse_bare_email() -> TestResult {
        let address = parse_one("jane@example.com")?;

        assert_eq!(address, ParsedAddress::new(None, "jane@example.com"));

        Ok(())
    }

    #[test]
    fn test_parse_bracketed_email_without_name() -> TestResult {
        let address = parse_one("<jane@example.com>")?;

        assert_eq!(address, ParsedAddress::new(None, "jane@example.com"));

        Ok(())
    }

    #[test]
    fn test_whitespace_between_name_and_bracket_is_dropped() -> TestResult {
        let address = parse_one(" Jane   <jane@example.com>")?;

        assert_eq!(address.name.as_deref(), Some("Jane"));

        Ok(())
    }

    #[test]
    fn test_empty_text_is_unparseable() {
        assert_eq!(parse_one(""), Err(EmailAddressError::Unparseable));
    }

    #[test]
    fn test_empty_brackets_are_unparseable() {
        assert_eq!(parse_one("<>"), Err(EmailAddressError::Unparseable));
        assert_eq!(parse_one("Jane <>"), Err(EmailAddressError::Unparseable));
    }

    #[test]
    fn test_multiline_text_is_unparseable() {
        assert_eq!(
            parse_one("jane@example.com\nbob@example.com"),
            Err(EmailAddressError::Unparseable)
        );
    }

    #[test]
    fn test_unmatched_brackets_are_accepted() -> TestResult {
        assert_eq!(parse_one("jane@example.com>")?.email, "jane@example.com");
        assert_eq!(parse_one("Jane <jane@example.com")?.email, "jane@example.com");
        assert_eq!(parse_one("not an email")?.email, "not an email");

        Ok(())
    }

    #[test]
    fn test_parsing_is_repeatable() {
        for text in ["Jane Doe <jane@example.com>", "<>"] {
            assert_eq!(parse_one(text), parse_one(text));
        }
    }

    #[test]
    fn test_display() -> TestResult {
        assert_eq!(
            parse_one("Jane Doe <jane@example.com>")?.to_string(),
            "Jane Doe <jane@example.com>"
        );
        assert_eq!(parse_one("jane@example.com")?.to_string(), "jane@example.com");

        Ok(())
    }
}
