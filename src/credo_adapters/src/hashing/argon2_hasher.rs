use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use credo_core::{HashingError, Password, PasswordHash, PasswordHasher};
use rand::{Rng, distr::Alphanumeric};
use secrecy::{ExposeSecret, Secret};

use crate::config::HashingSettings;

/// Argon2id password hasher.
///
/// Hashing and verification run on the blocking thread pool. Verification
/// uses the parameters encoded in the stored PHC string, and the digest
/// comparison inside `argon2` is constant-time.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
    dummy: PasswordHash,
}

impl Argon2PasswordHasher {
    pub fn new(settings: &HashingSettings) -> Result<Self, HashingError> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| HashingError(e.to_string()))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let throwaway: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        let dummy = compute_password_hash(&argon2, &throwaway)?;

        Ok(Self { argon2, dummy })
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError> {
        let current_span: tracing::Span = tracing::Span::current();
        let argon2 = self.argon2.clone();
        let password = password.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                compute_password_hash(&argon2, password.as_ref().expose_secret())
            })
        })
        .await
        .map_err(|e| HashingError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(&self, password: &Password, hash: &PasswordHash) -> bool {
        let current_span: tracing::Span = tracing::Span::current();
        let argon2 = self.argon2.clone();
        let password = password.clone();
        let hash = hash.clone();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| verify_password_hash(&argon2, &password, &hash))
        })
        .await;

        match result {
            Ok(matches) => matches,
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                false
            }
        }
    }

    fn dummy_hash(&self) -> &PasswordHash {
        &self.dummy
    }
}

fn compute_password_hash(
    argon2: &Argon2<'_>,
    plaintext: &str,
) -> Result<PasswordHash, HashingError> {
    let salt: SaltString = SaltString::generate(rand_core::OsRng);
    argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|h| PasswordHash::new(Secret::new(h.to_string())))
        .map_err(|e| HashingError(e.to_string()))
}

// A stored hash that does not parse verifies as false, same as a mismatch.
fn verify_password_hash(argon2: &Argon2<'_>, password: &Password, hash: &PasswordHash) -> bool {
    password_hash::PasswordHash::new(hash.as_ref().expose_secret())
        .and_then(|expected| {
            argon2.verify_password(password.as_ref().expose_secret().as_bytes(), &expected)
        })
        .is_ok()
}
