use super::ICompanyRepo;
use crate::repos::shared::inmemory_repo::*;
use company_registry_domain::{Company, ID};
use std::collections::HashMap;

/// Keeps `Company`s in a map owned by this instance, so every
/// `InMemoryCompanyRepo` is an isolated store.
pub struct InMemoryCompanyRepo {
    companies: std::sync::Mutex<HashMap<ID, Company>>,
}

impl InMemoryCompanyRepo {
    pub fn new() -> Self {
        Self {
            companies: std::sync::Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCompanyRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ICompanyRepo for InMemoryCompanyRepo {
    async fn persist(&self, company: &Company) -> anyhow::Result<()> {
        upsert(company, &self.companies);
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Company>> {
        Ok(find_all(&self.companies))
    }
}
