//! Process configuration, resolved once in `main` and passed down.

use crate::errors::ServerError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CATALOG: &str = "data/shoes.json";
pub const DEFAULT_WORKERS: usize = 8;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub catalog_path: PathBuf,
    pub max_workers: usize,
}

impl AppConfig {
    /// Reads `SHOE_SHELF_ADDR`, `SHOE_SHELF_CATALOG` and `SHOE_SHELF_WORKERS`.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let addr_raw = lookup("SHOE_SHELF_ADDR").unwrap_or_else(|| DEFAULT_ADDR.into());
        let addr = addr_raw
            .parse()
            .map_err(|e| ServerError::ConfigError(format!("SHOE_SHELF_ADDR {addr_raw:?}: {e}")))?;

        let catalog_path = lookup("SHOE_SHELF_CATALOG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));

        let max_workers = match lookup("SHOE_SHELF_WORKERS") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ServerError::ConfigError(format!(
                        "SHOE_SHELF_WORKERS must be a positive integer, got {raw:?}"
                    )))
                }
            },
            None => DEFAULT_WORKERS,
        };

        Ok(Self {
            addr,
            catalog_path,
            max_workers,
        })
    }
}
