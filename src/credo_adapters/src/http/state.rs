use std::sync::Arc;

use credo_application::{AuthenticationService, RegistrationService};
use credo_core::{PasswordHasher, UserStore};

/// Shared state handed to every user route.
pub struct AppState<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub authentication: Arc<AuthenticationService<U, H>>,
    pub registration: Arc<RegistrationService<U, H>>,
}

impl<U, H> AppState<U, H>
where
    U: UserStore + Clone,
    H: PasswordHasher + Clone,
{
    pub fn new(user_store: U, hasher: H) -> Self {
        Self {
            authentication: Arc::new(AuthenticationService::new(
                user_store.clone(),
                hasher.clone(),
            )),
            registration: Arc::new(RegistrationService::new(user_store, hasher)),
        }
    }
}

impl<U, H> Clone for AppState<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    fn clone(&self) -> Self {
        Self {
            authentication: Arc::clone(&self.authentication),
            registration: Arc::clone(&self.registration),
        }
    }
}
