//! Durable credential store backed by a Postgres `users` table.
//!
//! Schema lives in `db/schema.sql`. The unique index on `email` is the
//! race-safety net for concurrent signups: the duplicate check in the service
//! layer is not atomic with the insert, so the index violation is mapped to
//! [`StoreError::Duplicate`] here.

use crate::store::{Account, AccountView, CredentialStore, NewAccount, StoreError};
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Connection, PgPool};
use std::time::Duration;
use tracing::{debug, instrument};

// Postgres error code for unique_violation
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the database and build the store.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if the pool cannot be established.
    pub async fn connect(dsn: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .min_connections(1)
            .max_connections(5)
            .max_lifetime(Duration::from_secs(60 * 2))
            .test_before_acquire(true)
            .connect(dsn)
            .await?;

        Ok(Self { pool })
    }

    #[must_use]
    pub const fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
    } else {
        false
    }
}

#[async_trait]
impl CredentialStore for PgStore {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, email, password, name FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    #[instrument(skip(self, account), fields(email = %account.email))]
    async fn create(&self, account: NewAccount) -> Result<Account, StoreError> {
        let created = sqlx::query_as::<_, Account>(
            "INSERT INTO users (email, password, name) VALUES ($1, $2, $3) \
             RETURNING id, email, password, name",
        )
        .bind(&account.email)
        .bind(&account.password)
        .bind(&account.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                StoreError::Duplicate
            } else {
                StoreError::Unavailable(err)
            }
        })?;

        debug!("User created: {}", created.email);

        Ok(created)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<AccountView>, StoreError> {
        let views = sqlx::query_as::<_, AccountView>("SELECT id, email, name FROM users")
            .fetch_all(&self.pool)
            .await?;

        Ok(views)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;

        conn.ping().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_detection() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
    }
}
