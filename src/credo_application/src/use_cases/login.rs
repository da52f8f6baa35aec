use credo_core::{
    Email, Password, PasswordHasher, Payload, UserRecord, UserStore, UserStoreError, Username,
    ValidationError, validate,
};

use crate::outcome::AuthOutcome;

/// The identifier/password pair a login is attempted with.
///
/// An identifier of `None` was present in the request but could never have
/// been registered (bad email shape, overlong username). It still goes
/// through verification and is rejected like any other unknown account.
#[derive(Debug, Clone)]
pub enum Credential {
    Username {
        username: Option<Username>,
        password: Password,
    },
    Email {
        email: Option<Email>,
        password: Password,
    },
}

impl Credential {
    pub fn from_username_payload(payload: &Payload) -> Result<Self, ValidationError> {
        let [username, password] = validate(payload, ["username", "password"])?;

        Ok(Self::Username {
            username: Username::parse(username).ok(),
            password: Password::from_attempt(password),
        })
    }

    pub fn from_email_payload(payload: &Payload) -> Result<Self, ValidationError> {
        let [email, password] = validate(payload, ["email", "password"])?;

        Ok(Self::Email {
            email: Email::parse(email).ok(),
            password: Password::from_attempt(password),
        })
    }

    fn identifier_kind(&self) -> &'static str {
        match self {
            Self::Username { .. } => "username",
            Self::Email { .. } => "email",
        }
    }
}

/// Error types specific to the login use case.
///
/// Only failures that make the attempt impossible to judge end up here; a
/// rejected login is an [`AuthOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<UserStoreError> for LoginError {
    fn from(error: UserStoreError) -> Self {
        LoginError::StoreUnavailable(error.to_string())
    }
}

/// Authentication use case - verifies credentials by username or by email
pub struct AuthenticationService<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: U,
    hasher: H,
}

impl<U, H> AuthenticationService<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: U, hasher: H) -> Self {
        Self { user_store, hasher }
    }

    pub async fn login_by_username(&self, payload: &Payload) -> Result<AuthOutcome, LoginError> {
        match Credential::from_username_payload(payload) {
            Ok(credential) => self.authenticate(credential).await,
            Err(error) => Ok(AuthOutcome::MalformedRequest(error)),
        }
    }

    pub async fn login_by_email(&self, payload: &Payload) -> Result<AuthOutcome, LoginError> {
        match Credential::from_email_payload(payload) {
            Ok(credential) => self.authenticate(credential).await,
            Err(error) => Ok(AuthOutcome::MalformedRequest(error)),
        }
    }

    /// Execute a single lookup and a single verification.
    ///
    /// An unknown identifier is still verified against the hasher's dummy
    /// hash, so it costs as much as a wrong password and yields the same
    /// outcome.
    #[tracing::instrument(
        name = "AuthenticationService::authenticate",
        skip_all,
        fields(identifier = credential.identifier_kind())
    )]
    pub async fn authenticate(&self, credential: Credential) -> Result<AuthOutcome, LoginError> {
        let (record, password) = match &credential {
            Credential::Username {
                username: Some(username),
                password,
            } => (self.user_store.find_by_username(username).await?, password),
            Credential::Email {
                email: Some(email),
                password,
            } => (self.user_store.find_by_email(email).await?, password),
            Credential::Username {
                username: None,
                password,
            }
            | Credential::Email {
                email: None,
                password,
            } => {
                tracing::debug!("Identifier cannot belong to any account, skipping lookup");
                (None, password)
            }
        };

        let expected_hash = record
            .as_ref()
            .map_or(self.hasher.dummy_hash(), UserRecord::password_hash);
        let verified = self.hasher.verify(password, expected_hash).await;

        match record {
            Some(record) if verified => {
                tracing::info!(user_id = %record.id(), "Login succeeded");
                Ok(AuthOutcome::Success(record.profile()))
            }
            _ => {
                tracing::warn!("Login rejected");
                Ok(AuthOutcome::InvalidCredentials)
            }
        }
    }
}
