use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

const MAX_EMAIL_LEN: usize = 254;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern is a valid regex"));

/// A normalized email address.
///
/// Emails compare case-insensitively: the address is trimmed and lowercased
/// on parse, so lookups and the uniqueness constraint see the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(DomainError::Blank("email"));
        }
        if normalized.chars().count() > MAX_EMAIL_LEN {
            return Err(DomainError::TooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }
        if !EMAIL_PATTERN.is_match(&normalized) {
            return Err(DomainError::InvalidEmail);
        }

        Ok(Self(normalized))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
