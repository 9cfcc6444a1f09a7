use tracing::{info, warn};

const DEFAULT_PORT: usize = 5000;

/// Which storage adapter backs the `ICompanyRepo`. Exactly one is active.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    InMemory,
    MongoDb {
        connection_string: String,
        db_name: String,
    },
}

impl StorageBackend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::InMemory => "inmemory",
            Self::MongoDb { .. } => "mongodb",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    pub storage: StorageBackend,
}

impl Config {
    pub fn new() -> Self {
        let port = parse_port(std::env::var("PORT").ok());
        let storage = parse_storage_backend(
            std::env::var("COMPANY_STORAGE").ok(),
            std::env::var("MONGODB_CONNECTION_STRING").ok(),
            std::env::var("MONGODB_NAME").ok(),
        );

        Self { port, storage }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_port(port: Option<String>) -> usize {
    let port = match port {
        Some(port) => port,
        None => return DEFAULT_PORT,
    };
    match port.parse::<usize>() {
        Ok(port) => port,
        Err(_) => {
            warn!(
                "The given PORT: {} is not valid, falling back to the default port: {}.",
                port, DEFAULT_PORT
            );
            DEFAULT_PORT
        }
    }
}

fn parse_storage_backend(
    backend: Option<String>,
    connection_string: Option<String>,
    db_name: Option<String>,
) -> StorageBackend {
    match backend.as_deref().map(str::to_lowercase).as_deref() {
        None | Some("inmemory") => StorageBackend::InMemory,
        Some("mongodb") => match (connection_string, db_name) {
            (Some(connection_string), Some(db_name)) => StorageBackend::MongoDb {
                connection_string,
                db_name,
            },
            _ => {
                warn!("COMPANY_STORAGE is mongodb, but MONGODB_CONNECTION_STRING and MONGODB_NAME env vars was not provided. Going to use inmemory storage.");
                StorageBackend::InMemory
            }
        },
        Some(other) => {
            info!(
                "Unknown COMPANY_STORAGE: {}, expected inmemory or mongodb. Going to use inmemory storage.",
                other
            );
            StorageBackend::InMemory
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_falls_back_to_default_port() {
        assert_eq!(parse_port(None), DEFAULT_PORT);
        assert_eq!(parse_port(Some("not-a-port".into())), DEFAULT_PORT);
        assert_eq!(parse_port(Some("8080".into())), 8080);
        assert_eq!(parse_port(Some("0".into())), 0);
    }

    #[test]
    fn it_defaults_to_inmemory_storage() {
        assert_eq!(parse_storage_backend(None, None, None), StorageBackend::InMemory);
        assert_eq!(
            parse_storage_backend(Some("inmemory".into()), Some("mongodb://x".into()), None),
            StorageBackend::InMemory
        );
        assert_eq!(
            parse_storage_backend(Some("postgres".into()), None, None),
            StorageBackend::InMemory
        );
    }

    #[test]
    fn it_selects_mongodb_only_when_fully_configured() {
        assert_eq!(
            parse_storage_backend(
                Some("MongoDB".into()),
                Some("mongodb://localhost:27017".into()),
                Some("registry".into())
            ),
            StorageBackend::MongoDb {
                connection_string: "mongodb://localhost:27017".into(),
                db_name: "registry".into(),
            }
        );
        assert_eq!(
            parse_storage_backend(Some("mongodb".into()), None, Some("registry".into())),
            StorageBackend::InMemory
        );
    }
}
