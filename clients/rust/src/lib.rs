mod base;
mod company;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use company::CompanyClient;
pub use company::RegisterCompanyInput;
pub use company_registry_api_structs::dtos::*;
pub use company_registry_domain::{RegistrationStatus, ID};
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use company_registry_api_structs::dtos::CompanyDTO as Company;
pub use company_registry_api_structs::dtos::CompanyRegistrationDTO as CompanyRegistration;
pub use company_registry_api_structs::dtos::CompanySummaryDTO as CompanySummary;

/// Company Registry Server SDK
///
/// The SDK contains methods for interacting with the Company Registry
/// server API.
#[derive(Clone)]
pub struct RegistrySDK {
    pub company: CompanyClient,
    pub status: StatusClient,
}

impl RegistrySDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let company = CompanyClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { company, status }
    }
}
