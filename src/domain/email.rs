use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Local-part, one or more dot-separated labels, alphabetic TLD of 2+.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

#[derive(Error, Debug, PartialEq)]
#[error("`{0}` is not a valid email address")]
pub struct EmailParseError(String);

/// Validated email address; the only way in is `parse`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: String) -> Result<Email, EmailParseError> {
        if EMAIL_PATTERN.is_match(&raw) {
            Ok(Email(raw))
        } else {
            Err(EmailParseError(raw))
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
