use axum::{body::Bytes, extract::State, response::Response};
use credo_application::{AuthOutcome, ExternalSignal};
use credo_core::{PasswordHasher, Payload, UserStore};

use super::error::{ApiError, UserResponse};
use crate::http::AppState;

#[tracing::instrument(name = "Login by username", skip_all)]
pub async fn login_by_username<U, H>(
    State(state): State<AppState<U, H>>,
    body: Bytes,
) -> Result<Response, ApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
{
    let payload = Payload::from_slice(&body);
    let outcome = state.authentication.login_by_username(&payload).await?;

    into_response(outcome)
}

#[tracing::instrument(name = "Login by email", skip_all)]
pub async fn login_by_email<U, H>(
    State(state): State<AppState<U, H>>,
    body: Bytes,
) -> Result<Response, ApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
{
    let payload = Payload::from_slice(&body);
    let outcome = state.authentication.login_by_email(&payload).await?;

    into_response(outcome)
}

fn into_response(outcome: AuthOutcome) -> Result<Response, ApiError> {
    let signal = ExternalSignal::from(&outcome);

    match outcome {
        AuthOutcome::Success(user) => Ok(UserResponse {
            message: signal.message(),
            user,
        }
        .into_response_with(signal)),
        AuthOutcome::InvalidCredentials => Err(ApiError::InvalidCredentials),
        AuthOutcome::MalformedRequest(error) => Err(ApiError::MalformedRequest(error)),
    }
}
