use chrono::Utc;
use credo_core::{
    Email, HashingError, NewUser, Password, PasswordHasher, Payload, UserStore, UserStoreError,
    Username, ValidationError, validate,
};

use crate::outcome::RegistrationOutcome;

/// A validated signup request, consumed by exactly one registration.
#[derive(Debug)]
pub struct RegistrationRequest {
    pub email: Email,
    pub username: Username,
    pub password: Password,
}

impl RegistrationRequest {
    pub fn parse(payload: &Payload) -> Result<Self, ValidationError> {
        let [email, username, password] = validate(payload, ["email", "username", "password"])?;

        Ok(Self {
            email: Email::parse(email)?,
            username: Username::parse(username)?,
            password: Password::parse(password)?,
        })
    }
}

/// Error types specific to the registration use case
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("User store unavailable: {0}")]
    StoreUnavailable(String),
    #[error(transparent)]
    Hashing(#[from] HashingError),
}

impl From<UserStoreError> for RegistrationError {
    fn from(error: UserStoreError) -> Self {
        RegistrationError::StoreUnavailable(error.to_string())
    }
}

/// Registration use case - creates accounts with unique username and email
pub struct RegistrationService<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: U,
    hasher: H,
}

impl<U, H> RegistrationService<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: U, hasher: H) -> Self {
        Self { user_store, hasher }
    }

    pub async fn register(&self, payload: &Payload) -> Result<RegistrationOutcome, RegistrationError> {
        match RegistrationRequest::parse(payload) {
            Ok(request) => self.execute(request).await,
            Err(error) => Ok(RegistrationOutcome::MalformedRequest(error)),
        }
    }

    /// Execute the registration use case
    ///
    /// The `exists` pre-check spares a hash computation for obvious
    /// duplicates. The store's own constraint on `insert` is what actually
    /// guarantees uniqueness; both report `DuplicateAccount`.
    #[tracing::instrument(name = "RegistrationService::execute", skip_all)]
    pub async fn execute(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        let RegistrationRequest {
            email,
            username,
            password,
        } = request;

        if let Some(key) = self.user_store.exists(&username, &email).await? {
            tracing::warn!(%key, "Registration rejected, account exists");
            return Ok(RegistrationOutcome::DuplicateAccount);
        }

        let password_hash = self.hasher.hash(&password).await?;
        let new_user = NewUser {
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        };

        match self.user_store.insert(new_user).await {
            Ok(record) => {
                tracing::info!(user_id = %record.id(), "Account created");
                Ok(RegistrationOutcome::Created(record.profile()))
            }
            Err(UserStoreError::UniquenessViolation(key)) => {
                tracing::warn!(%key, "Registration lost a race on insert");
                Ok(RegistrationOutcome::DuplicateAccount)
            }
            Err(e) => Err(e.into()),
        }
    }
}
