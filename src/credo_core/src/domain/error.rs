use thiserror::Error;

/// Errors raised while parsing raw field values into domain types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0} must not be blank")]
    Blank(&'static str),
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("email is not a valid address")]
    InvalidEmail,
}

impl DomainError {
    /// Name of the payload field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Blank(field) => field,
            Self::TooLong { field, .. } => field,
            Self::InvalidEmail => "email",
        }
    }
}
