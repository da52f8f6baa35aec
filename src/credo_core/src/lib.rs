pub mod domain;
pub mod ports;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    error::DomainError,
    password::{Password, PasswordHash},
    user::{NewUser, UserId, UserProfile, UserRecord},
    username::Username,
};

pub use ports::{
    repositories::{UniqueKey, UserStore, UserStoreError},
    services::{HashingError, PasswordHasher},
};

pub use validation::{FieldIssue, FieldProblem, Payload, ValidationError, validate};
