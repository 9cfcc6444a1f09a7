mod config;
mod repos;
mod system;

pub use config::{Config, StorageBackend};
pub use repos::{ICompanyRepo, InMemoryCompanyRepo, Repos};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;

#[derive(Clone)]
pub struct RegistryContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl RegistryContext {
    /// Context backed by a fresh `InMemoryCompanyRepo` that nothing else shares
    pub fn create_inmemory() -> Self {
        let mut config = Config::new();
        config.storage = StorageBackend::InMemory;
        Self {
            repos: Repos::create_inmemory(),
            config,
            sys: Arc::new(RealSys {}),
        }
    }

    async fn create(config: Config) -> anyhow::Result<Self> {
        let repos = match &config.storage {
            StorageBackend::InMemory => {
                info!("Going to use inmemory storage for companies.");
                Repos::create_inmemory()
            }
            StorageBackend::MongoDb {
                connection_string,
                db_name,
            } => {
                info!("Going to use mongodb storage for companies.");
                Repos::create_mongodb(connection_string, db_name).await?
            }
        };

        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
        })
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<RegistryContext> {
    RegistryContext::create(Config::new()).await
}
