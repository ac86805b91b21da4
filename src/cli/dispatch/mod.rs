use crate::cli::actions::{Action, StoreKind};
use anyhow::Result;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let store = match matches.get_one::<String>("store").map(String::as_str) {
        Some("memory") => StoreKind::Memory,
        _ => StoreKind::Postgres,
    };

    let dsn = matches.get_one::<String>("dsn").map(String::to_string);

    // clap already enforces this for the postgres store, keep it as a guard
    if store == StoreKind::Postgres && dsn.is_none() {
        return Err(anyhow::anyhow!("missing required argument: --dsn"));
    }

    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied(),
        store,
        dsn,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn test_dispatch_postgres() -> Result<()> {
        temp_env::with_vars(
            [
                ("ACCOUNTD_PORT", None::<String>),
                ("ACCOUNTD_STORE", None::<String>),
            ],
            || {
                let matches = commands::new().try_get_matches_from(vec![
                    "accountd",
                    "--dsn",
                    "postgres://localhost:5432/accountd",
                ])?;

                let Action::Server { port, store, dsn } = handler(&matches)?;

                assert_eq!(port, None);
                assert_eq!(store, StoreKind::Postgres);
                assert_eq!(dsn.as_deref(), Some("postgres://localhost:5432/accountd"));

                Ok(())
            },
        )
    }

    #[test]
    fn test_dispatch_memory() -> Result<()> {
        temp_env::with_vars(
            [
                ("ACCOUNTD_DSN", None::<String>),
                ("ACCOUNTD_PORT", None::<String>),
            ],
            || {
                let matches = commands::new().try_get_matches_from(vec![
                    "accountd", "--store", "memory", "--port", "3001",
                ])?;

                let Action::Server { port, store, dsn } = handler(&matches)?;

                assert_eq!(port, Some(3001));
                assert_eq!(store, StoreKind::Memory);
                assert_eq!(dsn, None);

                Ok(())
            },
        )
    }
}
