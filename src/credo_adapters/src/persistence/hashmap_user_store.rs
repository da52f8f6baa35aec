use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use credo_core::{
    Email, NewUser, UniqueKey, UserId, UserRecord, UserStore, UserStoreError, Username,
};

#[derive(Default)]
struct Users {
    records: HashMap<UserId, UserRecord>,
    by_username: HashMap<Username, UserId>,
    by_email: HashMap<Email, UserId>,
}

impl Users {
    fn taken_key(&self, username: &Username, email: &Email) -> Option<UniqueKey> {
        if self.by_username.contains_key(username) {
            Some(UniqueKey::Username)
        } else if self.by_email.contains_key(email) {
            Some(UniqueKey::Email)
        } else {
            None
        }
    }
}

/// In-memory user store.
///
/// The uniqueness check and the insert happen under one write lock, which is
/// this store's equivalent of a unique constraint.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<Users>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserRecord>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users
            .by_username
            .get(username)
            .and_then(|id| users.records.get(id))
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<UserRecord>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users
            .by_email
            .get(email)
            .and_then(|id| users.records.get(id))
            .cloned())
    }

    async fn exists(
        &self,
        username: &Username,
        email: &Email,
    ) -> Result<Option<UniqueKey>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.taken_key(username, email))
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, UserStoreError> {
        let mut users = self.users.write().await;
        if let Some(key) = users.taken_key(&user.username, &user.email) {
            return Err(UserStoreError::UniquenessViolation(key));
        }

        let record = user.into_record(UserId::new());
        users
            .by_username
            .insert(record.username().clone(), record.id());
        users.by_email.insert(record.email().clone(), record.id());
        users.records.insert(record.id(), record.clone());
        Ok(record)
    }
}
