use std::sync::{
    Arc,
    atomic::{AtomicU64, AtomicUsize, Ordering},
};

use credo_core::{
    Email, HashingError, NewUser, Password, PasswordHash, PasswordHasher, UniqueKey, UserId,
    UserRecord, UserStore, UserStoreError, Username,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

/// In-memory store with switches for the failure modes the use cases care about.
#[derive(Clone, Default)]
pub struct MockUserStore {
    users: Arc<RwLock<Vec<UserRecord>>>,
    pub unavailable: bool,
    /// Makes `exists` always answer "free", as if another request raced us
    pub stale_exists: bool,
}

impl MockUserStore {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_stale_exists() -> Self {
        Self {
            stale_exists: true,
            ..Self::default()
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    fn check_available(&self) -> Result<(), UserStoreError> {
        if self.unavailable {
            return Err(UserStoreError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }

    fn taken_key(users: &[UserRecord], username: &Username, email: &Email) -> Option<UniqueKey> {
        if users.iter().any(|u| u.username() == username) {
            Some(UniqueKey::Username)
        } else if users.iter().any(|u| u.email() == email) {
            Some(UniqueKey::Email)
        } else {
            None
        }
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserRecord>, UserStoreError> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username() == username).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<UserRecord>, UserStoreError> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email() == email).cloned())
    }

    async fn exists(
        &self,
        username: &Username,
        email: &Email,
    ) -> Result<Option<UniqueKey>, UserStoreError> {
        self.check_available()?;
        if self.stale_exists {
            return Ok(None);
        }
        let users = self.users.read().await;
        Ok(Self::taken_key(&users, username, email))
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, UserStoreError> {
        self.check_available()?;
        let mut users = self.users.write().await;
        if let Some(key) = Self::taken_key(&users, &user.username, &user.email) {
            return Err(UserStoreError::UniquenessViolation(key));
        }
        let record = user.into_record(UserId::new());
        users.push(record.clone());
        Ok(record)
    }
}

/// Cheap reversible stand-in for a real hasher: `fake$<salt>$<plaintext>`.
#[derive(Clone)]
pub struct FakeHasher {
    salt: Arc<AtomicU64>,
    verify_calls: Arc<AtomicUsize>,
    dummy: PasswordHash,
}

impl Default for FakeHasher {
    fn default() -> Self {
        Self {
            salt: Arc::new(AtomicU64::new(1)),
            verify_calls: Arc::new(AtomicUsize::new(0)),
            dummy: PasswordHash::new(Secret::new("fake$0$".to_string())),
        }
    }
}

impl FakeHasher {
    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError> {
        let salt = self.salt.fetch_add(1, Ordering::SeqCst);
        Ok(PasswordHash::new(Secret::new(format!(
            "fake${salt}${}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify(&self, password: &Password, hash: &PasswordHash) -> bool {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        match hash.as_ref().expose_secret().splitn(3, '$').collect::<Vec<_>>()[..] {
            ["fake", _, plaintext] => plaintext == password.as_ref().expose_secret().as_str(),
            _ => false,
        }
    }

    fn dummy_hash(&self) -> &PasswordHash {
        &self.dummy
    }
}
