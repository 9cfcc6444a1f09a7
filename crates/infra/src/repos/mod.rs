mod company;
mod shared;

pub use company::{ICompanyRepo, InMemoryCompanyRepo};
use company::MongoCompanyRepo;
use mongodb::{bson::doc, options::ClientOptions, Client};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub companies: Arc<dyn ICompanyRepo>,
}

impl Repos {
    pub async fn create_mongodb(connection_string: &str, db_name: &str) -> anyhow::Result<Self> {
        let client_options = ClientOptions::parse(connection_string).await?;
        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // This is needed to make sure that db is ready when opening server
        info!("DB CHECKING CONNECTION ...");
        db.run_command(doc! { "ping": 1 }, None).await?;
        info!("DB CHECKING CONNECTION ... [done]");
        Ok(Self {
            companies: Arc::new(MongoCompanyRepo::new(&db)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            companies: Arc::new(InMemoryCompanyRepo::new()),
        }
    }
}
