use async_trait::async_trait;
use thiserror::Error;

use crate::domain::password::{Password, PasswordHash};

#[derive(Debug, Error)]
#[error("Password hashing failed: {0}")]
pub struct HashingError(pub String);

/// One-way password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produces a salted hash; hashing the same password twice yields two
    /// different encodings.
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError>;

    /// Constant-time check of `password` against `hash`.
    ///
    /// A malformed `hash` verifies as `false`, indistinguishable from a wrong
    /// password.
    async fn verify(&self, password: &Password, hash: &PasswordHash) -> bool;

    /// A valid hash no client password matches, used when a login identifier
    /// is unknown so the attempt still pays for one full verification.
    fn dummy_hash(&self) -> &PasswordHash;
}
