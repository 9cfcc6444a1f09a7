mod inmemory;
mod mongo;

pub use inmemory::InMemoryCompanyRepo;
pub use mongo::MongoCompanyRepo;

use company_registry_domain::Company;

/// Storage port for `Company`s.
///
/// Every adapter returns the domain `Company`, never its own storage shape.
#[async_trait::async_trait]
pub trait ICompanyRepo: Send + Sync {
    /// Stores the `Company`, replacing whatever was stored under the same id
    async fn persist(&self, company: &Company) -> anyhow::Result<()>;
    /// Snapshot of every stored `Company`, in no particular order
    async fn find_all(&self) -> anyhow::Result<Vec<Company>>;
}
