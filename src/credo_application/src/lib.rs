pub mod outcome;
pub mod result_mapper;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use outcome::{AuthOutcome, RegistrationOutcome};
pub use result_mapper::ExternalSignal;
pub use use_cases::{
    login::{AuthenticationService, Credential, LoginError},
    register::{RegistrationError, RegistrationRequest, RegistrationService},
};
