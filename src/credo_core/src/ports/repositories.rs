use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    user::{NewUser, UserRecord},
    username::Username,
};

/// The unique keys of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueKey {
    Username,
    Email,
}

impl fmt::Display for UniqueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => f.write_str("username"),
            Self::Email => f.write_str("email"),
        }
    }
}

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("A user with this {0} already exists")]
    UniquenessViolation(UniqueKey),
    #[error("User store unavailable: {0}")]
    Unavailable(String),
    /// A stored row no longer satisfies the domain rules
    #[error("Corrupt user record: {0}")]
    CorruptRecord(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UniquenessViolation(a), Self::UniquenessViolation(b)) => a == b,
            (Self::Unavailable(_), Self::Unavailable(_)) => true,
            (Self::CorruptRecord(_), Self::CorruptRecord(_)) => true,
            _ => false,
        }
    }
}

/// Persistence contract for user records.
///
/// `insert` must enforce username and email uniqueness atomically and report
/// a lost race as [`UserStoreError::UniquenessViolation`]; callers treat any
/// earlier `exists` check as an optimization only.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserRecord>, UserStoreError>;

    async fn find_by_email(&self, email: &Email) -> Result<Option<UserRecord>, UserStoreError>;

    /// Returns the first unique key already taken by an existing record.
    async fn exists(
        &self,
        username: &Username,
        email: &Email,
    ) -> Result<Option<UniqueKey>, UserStoreError>;

    async fn insert(&self, user: NewUser) -> Result<UserRecord, UserStoreError>;
}
