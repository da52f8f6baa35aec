//! # Credo - Credential Authentication Service Library
//!
//! This is a facade crate that re-exports the public APIs of the credo service components.
//! Use this crate to get login and registration in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! credo = { path = "../credo" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Email`, `Password`, `UserProfile`, etc.
//! - **Ports**: `UserStore`, `PasswordHasher`
//! - **Use cases**: `AuthenticationService`, `RegistrationService`
//! - **Adapters**: `HashMapUserStore`, `PostgresUserStore`, `Argon2PasswordHasher`
//! - **Service**: `AuthService` - The main entry point for the HTTP service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types, ports and payload validation
pub mod core {
    pub use credo_core::*;
}

// Re-export most commonly used core types at the root level
pub use credo_core::{
    DomainError, Email, FieldIssue, FieldProblem, NewUser, Password, PasswordHash, Payload,
    UserId, UserProfile, UserRecord, Username, ValidationError, validate,
};

// ============================================================================
// Ports
// ============================================================================

/// Store and hasher trait definitions
pub mod ports {
    pub use credo_core::{HashingError, PasswordHasher, UniqueKey, UserStore, UserStoreError};
}

pub use credo_core::{HashingError, PasswordHasher, UniqueKey, UserStore, UserStoreError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases and outcome mapping
pub mod use_cases {
    pub use credo_application::*;
}

pub use credo_application::{
    AuthOutcome, AuthenticationService, Credential, ExternalSignal, LoginError,
    RegistrationError, RegistrationOutcome, RegistrationRequest, RegistrationService,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use credo_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use credo_adapters::persistence::*;
    }

    /// Password hashing implementations
    pub mod hashing {
        pub use credo_adapters::hashing::*;
    }

    /// Configuration
    pub mod config {
        pub use credo_adapters::config::*;
    }
}

pub use credo_adapters::{
    hashing::Argon2PasswordHasher,
    persistence::{HashMapUserStore, PostgresUserStore},
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use credo_auth_service::{AuthService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing `UserStore` and `PasswordHasher`
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
