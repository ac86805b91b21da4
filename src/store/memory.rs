//! Transient credential store: a shared in-process list.
//!
//! Intended for local testing, nothing survives a restart. Ids are derived
//! from the creation timestamp in milliseconds and are not guaranteed unique
//! across restarts.
//!
//! `create` performs no duplicate re-check: the service layer looks up the
//! email first, and the window between that lookup and the append is a known
//! limitation of this backend.

use crate::store::{Account, AccountView, CredentialStore, NewAccount, StoreError};
use async_trait::async_trait;
use std::time::SystemTime;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: Mutex<Vec<Account>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn now_unix_millis() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.lock().await;

        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn create(&self, account: NewAccount) -> Result<Account, StoreError> {
        let account = Account {
            id: now_unix_millis(),
            email: account.email,
            password: account.password,
            name: account.name,
        };

        let mut accounts = self.accounts.lock().await;

        accounts.push(account.clone());

        debug!("User added: {}, total users: {}", account.email, accounts.len());

        Ok(account)
    }

    async fn list_all(&self) -> Result<Vec<AccountView>, StoreError> {
        let accounts = self.accounts.lock().await;

        Ok(accounts.iter().map(Account::view).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
