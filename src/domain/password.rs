use thiserror::Error;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Error, Debug, PartialEq)]
#[error("password must be at least 8 characters long and include an uppercase letter and a special character")]
pub struct PasswordParseError;

/// Plaintext password that met the policy; hashed before storage and
/// deliberately not `Serialize`.
#[derive(Debug, Clone, PartialEq)]
pub struct Password(String);

impl Password {
    pub fn parse(raw: String) -> Result<Password, PasswordParseError> {
        let long_enough = raw.chars().count() >= MIN_PASSWORD_LEN;
        let has_uppercase = raw.chars().any(|c| c.is_ascii_uppercase());
        let has_special = raw.chars().any(|c| !c.is_ascii_alphanumeric());

        if long_enough && has_uppercase && has_special {
            Ok(Password(raw))
        } else {
            Err(PasswordParseError)
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
