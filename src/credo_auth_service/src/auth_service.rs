use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use credo_adapters::{
    config::{AllowedOrigins, routes},
    http::{
        AppState,
        routes::{health_check, login_by_email, login_by_username, register},
    },
};
use credo_core::{PasswordHasher, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// Authentication and registration service exposing the user routes
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService with the provided user store and password hasher
    ///
    /// # Arguments
    /// * `user_store` - Store for user records (must be Clone)
    /// * `hasher` - Password hasher (must be Clone)
    ///
    /// Both are cloned once into the login and registration services, which
    /// then live behind an `Arc` shared by every request.
    pub fn new<U, H>(user_store: U, hasher: H) -> Self
    where
        U: UserStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
    {
        let state = AppState::new(user_store, hasher);

        let users = Router::new()
            .route(routes::LOGIN_USERNAME, post(login_by_username::<U, H>))
            .route(routes::LOGIN_EMAIL, post(login_by_email::<U, H>))
            .route(routes::REGISTER, post(register::<U, H>))
            .with_state(state);

        let router = Router::new()
            .nest(routes::USERS_PREFIX, users)
            .route(routes::HEALTH, get(health_check));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
