use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use credo_application::{ExternalSignal, LoginError, RegistrationError};
use credo_core::{FieldIssue, UserProfile, ValidationError};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldIssue>,
}

/// Success body shared by login and registration.
#[derive(Serialize)]
pub struct UserResponse {
    pub message: &'static str,
    pub user: UserProfile,
}

impl UserResponse {
    pub fn into_response_with(self, signal: ExternalSignal) -> Response {
        (status_code(signal), Json(self)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    MalformedRequest(#[from] ValidationError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account already exists")]
    DuplicateAccount,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl ApiError {
    fn signal(&self) -> ExternalSignal {
        match self {
            ApiError::MalformedRequest(_) => ExternalSignal::InvalidFields,
            ApiError::InvalidCredentials => ExternalSignal::AuthenticationRejected,
            ApiError::DuplicateAccount => ExternalSignal::AccountConflict,
            ApiError::UnexpectedError(_) => ExternalSignal::ServerError,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let signal = self.signal();

        let fields = match &self {
            ApiError::MalformedRequest(error) => error.issues().to_vec(),
            ApiError::UnexpectedError(cause) => {
                tracing::error!(%cause, "Request failed");
                Vec::new()
            }
            _ => Vec::new(),
        };

        let body = Json(ErrorResponse {
            error: signal.message().to_string(),
            fields,
        });

        (status_code(signal), body).into_response()
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<RegistrationError> for ApiError {
    fn from(error: RegistrationError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

pub(crate) fn status_code(signal: ExternalSignal) -> StatusCode {
    StatusCode::from_u16(signal.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
