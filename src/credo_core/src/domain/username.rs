use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

const MAX_USERNAME_LEN: usize = 64;

/// A username, compared exactly as stored (case-sensitive, untrimmed).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::Blank("username"));
        }
        if raw.chars().count() > MAX_USERNAME_LEN {
            return Err(DomainError::TooLong {
                field: "username",
                max: MAX_USERNAME_LEN,
            });
        }

        Ok(Self(raw.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
