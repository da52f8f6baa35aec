use credo_core::{UserProfile, ValidationError};

/// Result of a login attempt. Never carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// Credentials matched; the caller may go on to issue a session
    Success(UserProfile),
    /// Unknown identifier or wrong password, deliberately not distinguished
    InvalidCredentials,
    MalformedRequest(ValidationError),
}

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    Created(UserProfile),
    MalformedRequest(ValidationError),
    /// Username or email already taken, whichever layer noticed it
    DuplicateAccount,
}
