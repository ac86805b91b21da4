//! Credential store: persistence for user accounts.
//!
//! Two interchangeable backends implement [`CredentialStore`]: a durable
//! Postgres table ([`PgStore`]) and a transient in-process list
//! ([`MemoryStore`]). The service layer picks one at startup and only ever
//! talks to the trait object.

pub mod memory;
pub mod postgres;

pub use self::memory::MemoryStore;
pub use self::postgres::PgStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A stored account. Internal to the service, never serialized to a client:
/// `password` holds the bcrypt hash and all read paths go through
/// [`AccountView`] instead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub name: String,
}

impl Account {
    #[must_use]
    pub fn view(&self) -> AccountView {
        AccountView {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Input to [`CredentialStore::create`]. `password` must already be hashed,
/// the store never sees a plaintext secret.
#[derive(Debug)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// What list/query responses carry: the stored hash is excluded at the type
/// level.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AccountView {
    pub id: i64,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// An account with the same email already exists.
    #[error("account already exists")]
    Duplicate,

    /// The backing database could not be reached or the query failed.
    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up an account by email. A miss is `Ok(None)`, not an error.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Insert a new account and return it with its assigned id.
    ///
    /// The postgres backend maps a unique-index violation to
    /// [`StoreError::Duplicate`]; the memory backend does not re-check and
    /// relies on the caller's lookup.
    async fn create(&self, account: NewAccount) -> Result<Account, StoreError>;

    /// All accounts, as views without the password hash.
    async fn list_all(&self) -> Result<Vec<AccountView>, StoreError>;

    /// Health probe. The memory backend is infallible.
    async fn ping(&self) -> Result<(), StoreError>;
}
