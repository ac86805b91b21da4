use crate::{
    api,
    cli::actions::{Action, StoreKind},
    store::{CredentialStore, MemoryStore, PgStore},
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server { port, store, dsn } => {
            let port = port.unwrap_or_else(|| store.default_port());

            let store: Arc<dyn CredentialStore> = match store {
                StoreKind::Postgres => {
                    let dsn = dsn.context("missing required argument: --dsn")?;

                    let store = PgStore::connect(&dsn)
                        .await
                        .context("Failed to connect to database")?;

                    info!("Using postgres credential store");

                    Arc::new(store)
                }

                StoreKind::Memory => {
                    info!("Using in-memory credential store, accounts are lost on restart");

                    Arc::new(MemoryStore::new())
                }
            };

            api::new(port, store).await?;
        }
    }

    Ok(())
}
