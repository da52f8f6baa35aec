use color_eyre::eyre::Result;
use credo_adapters::{
    config::{Settings, StoreKind},
    hashing::Argon2PasswordHasher,
    persistence::HashMapUserStore,
};
use credo_auth_service::{AuthService, configure_postgresql, telemetry::init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;
    let hasher = Argon2PasswordHasher::new(&settings.hashing)?;
    let allowed_origins = Some(settings.cors.allowed_origins.clone());

    let listener = TcpListener::bind(settings.application.address()).await?;

    match settings.store {
        StoreKind::Memory => {
            tracing::warn!("Using the in-memory user store, accounts are lost on restart");
            AuthService::new(HashMapUserStore::new(), hasher)
                .run_standalone(listener, allowed_origins)
                .await?;
        }
        StoreKind::Postgres => {
            let user_store = configure_postgresql(&settings.database).await?;
            AuthService::new(user_store, hasher)
                .run_standalone(listener, allowed_origins)
                .await?;
        }
    }

    Ok(())
}
