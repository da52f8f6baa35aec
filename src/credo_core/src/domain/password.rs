use secrecy::{ExposeSecret, Secret};

use super::error::DomainError;

const MAX_PASSWORD_LEN: usize = 1024;

/// A plaintext password as supplied by the client.
///
/// The value lives in a [`Secret`] so it never shows up in `Debug` output,
/// logs or tracing spans.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::Blank("password"));
        }
        if raw.chars().count() > MAX_PASSWORD_LEN {
            return Err(DomainError::TooLong {
                field: "password",
                max: MAX_PASSWORD_LEN,
            });
        }

        Ok(Self(Secret::new(raw.to_owned())))
    }

    /// Wraps a password offered at login.
    ///
    /// No length limit applies: a password longer than any account could
    /// have registered with just fails verification.
    pub fn from_attempt(raw: &str) -> Self {
        Self(Secret::new(raw.to_owned()))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = DomainError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value.expose_secret())
    }
}

/// An opaque, salted one-way encoding of a password (PHC string format).
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(encoded: Secret<String>) -> Self {
        Self(encoded)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
