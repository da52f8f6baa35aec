use chrono::{DateTime, Utc};
use credo_core::{
    Email, NewUser, PasswordHash, UniqueKey, UserId, UserRecord, UserStore, UserStoreError,
    Username,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, PgPool, migrate::MigrateError};
use uuid::Uuid;

const USERNAME_CONSTRAINT: &str = "users_username_key";
const EMAIL_CONSTRAINT: &str = "users_email_key";

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }

    /// Create or update the `users` table, including its unique constraints.
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_record(self) -> Result<UserRecord, UserStoreError> {
        let username = Username::parse(&self.username)
            .map_err(|e| UserStoreError::CorruptRecord(format!("user {}: {e}", self.id)))?;
        let email = Email::parse(&self.email)
            .map_err(|e| UserStoreError::CorruptRecord(format!("user {}: {e}", self.id)))?;

        Ok(UserRecord::new(
            UserId::from(self.id),
            username,
            email,
            PasswordHash::new(Secret::new(self.password_hash)),
            self.created_at,
        ))
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Find user by username in PostgreSQL", skip_all)]
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserRecord>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, email, password_hash, created_at
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::Unavailable(e.to_string()))?;

        row.map(UserRow::into_record).transpose()
    }

    #[tracing::instrument(name = "Find user by email in PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<UserRecord>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, email, password_hash, created_at
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::Unavailable(e.to_string()))?;

        row.map(UserRow::into_record).transpose()
    }

    #[tracing::instrument(name = "Check user existence in PostgreSQL", skip_all)]
    async fn exists(
        &self,
        username: &Username,
        email: &Email,
    ) -> Result<Option<UniqueKey>, UserStoreError> {
        let username_taken = sqlx::query_scalar::<_, bool>(
            r#"
                SELECT username = $1
                FROM users
                WHERE username = $1 OR email = $2
                ORDER BY username = $1 DESC
                LIMIT 1
            "#,
        )
        .bind(username.as_ref())
        .bind(email.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::Unavailable(e.to_string()))?;

        Ok(username_taken.map(|taken| {
            if taken {
                UniqueKey::Username
            } else {
                UniqueKey::Email
            }
        }))
    }

    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn insert(&self, user: NewUser) -> Result<UserRecord, UserStoreError> {
        let id = UserId::new();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (id, username, email, password_hash, created_at)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, username, email, password_hash, created_at
            "#,
        )
        .bind(*id.as_ref())
        .bind(user.username.as_ref())
        .bind(user.email.as_ref())
        .bind(user.password_hash.as_ref().expose_secret().as_str())
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        row.into_record()
    }
}

fn map_insert_error(error: sqlx::Error) -> UserStoreError {
    if let Some(db_err) = error.as_database_error()
        && db_err.is_unique_violation()
        && let Some(key) = unique_key_for_constraint(db_err.constraint())
    {
        return UserStoreError::UniquenessViolation(key);
    }
    UserStoreError::Unavailable(error.to_string())
}

// Only the username and email constraints are user-facing; an id collision
// or any other constraint is a store fault.
fn unique_key_for_constraint(constraint: Option<&str>) -> Option<UniqueKey> {
    match constraint {
        Some(USERNAME_CONSTRAINT) => Some(UniqueKey::Username),
        Some(EMAIL_CONSTRAINT) => Some(UniqueKey::Email),
        _ => None,
    }
}
