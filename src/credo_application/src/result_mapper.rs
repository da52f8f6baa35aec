//! Maps use case results onto the externally visible result taxonomy.

use crate::{
    outcome::{AuthOutcome, RegistrationOutcome},
    use_cases::{login::LoginError, register::RegistrationError},
};

/// What the transport layer should tell the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalSignal {
    Authenticated,
    AccountCreated,
    InvalidFields,
    AuthenticationRejected,
    AccountConflict,
    ServerError,
}

impl ExternalSignal {
    /// HTTP status code kept for compatibility with existing clients.
    pub const fn status_code(self) -> u16 {
        match self {
            Self::Authenticated => 200,
            Self::AccountCreated => 201,
            Self::InvalidFields => 400,
            Self::AuthenticationRejected => 401,
            Self::AccountConflict => 409,
            Self::ServerError => 500,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Authenticated => "Login successful",
            Self::AccountCreated => "User created successfully",
            Self::InvalidFields => "Missing or invalid fields",
            Self::AuthenticationRejected => "Invalid credentials",
            Self::AccountConflict => "An account with this username or email already exists",
            Self::ServerError => "Internal server error",
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Authenticated | Self::AccountCreated)
    }
}

impl From<&AuthOutcome> for ExternalSignal {
    fn from(outcome: &AuthOutcome) -> Self {
        match outcome {
            AuthOutcome::Success(_) => Self::Authenticated,
            AuthOutcome::MalformedRequest(_) => Self::InvalidFields,
            AuthOutcome::InvalidCredentials => Self::AuthenticationRejected,
        }
    }
}

impl From<&RegistrationOutcome> for ExternalSignal {
    fn from(outcome: &RegistrationOutcome) -> Self {
        match outcome {
            RegistrationOutcome::Created(_) => Self::AccountCreated,
            RegistrationOutcome::MalformedRequest(_) => Self::InvalidFields,
            RegistrationOutcome::DuplicateAccount => Self::AccountConflict,
        }
    }
}

impl From<&LoginError> for ExternalSignal {
    fn from(_: &LoginError) -> Self {
        Self::ServerError
    }
}

impl From<&RegistrationError> for ExternalSignal {
    fn from(_: &RegistrationError) -> Self {
        Self::ServerError
    }
}
