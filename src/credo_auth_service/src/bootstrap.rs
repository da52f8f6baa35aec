use color_eyre::eyre::{Result, WrapErr};
use credo_adapters::{config::DatabaseSettings, persistence::PostgresUserStore};
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Connect to PostgreSQL and run the pending migrations.
pub async fn configure_postgresql(settings: &DatabaseSettings) -> Result<PostgresUserStore> {
    let pg_pool = get_postgres_pool(settings)
        .await
        .wrap_err("Failed to create Postgres connection pool")?;

    let store = PostgresUserStore::new(pg_pool);
    store
        .migrate()
        .await
        .wrap_err("Failed to run migrations")?;

    Ok(store)
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(settings.url.expose_secret())
        .await
}
