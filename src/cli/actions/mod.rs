pub mod server;

/// Which credential store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl StoreKind {
    /// 3000 for the durable store, 3001 for the transient one.
    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Postgres => 3000,
            Self::Memory => 3001,
        }
    }
}

#[derive(Debug)]
pub enum Action {
    Server {
        port: Option<u16>,
        store: StoreKind,
        dsn: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ports() {
        assert_eq!(StoreKind::Postgres.default_port(), 3000);
        assert_eq!(StoreKind::Memory.default_port(), 3001);
    }
}
