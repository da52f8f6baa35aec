use axum::{body::Bytes, extract::State, response::Response};
use credo_application::{ExternalSignal, RegistrationOutcome};
use credo_core::{PasswordHasher, Payload, UserStore};

use super::error::{ApiError, UserResponse};
use crate::http::AppState;

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H>(
    State(state): State<AppState<U, H>>,
    body: Bytes,
) -> Result<Response, ApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
{
    let payload = Payload::from_slice(&body);
    let outcome = state.registration.register(&payload).await?;
    let signal = ExternalSignal::from(&outcome);

    match outcome {
        RegistrationOutcome::Created(user) => Ok(UserResponse {
            message: signal.message(),
            user,
        }
        .into_response_with(signal)),
        RegistrationOutcome::DuplicateAccount => Err(ApiError::DuplicateAccount),
        RegistrationOutcome::MalformedRequest(error) => Err(ApiError::MalformedRequest(error)),
    }
}
