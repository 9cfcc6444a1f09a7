use company_registry_domain::{Company, CompanyRegistration, RegistrationStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDTO {
    pub id: ID,
    pub name: Option<String>,
    pub link: Option<String>,
    pub mission_statement: Option<String>,
    pub logo: Option<String>,
    pub registration: CompanyRegistrationDTO,
}

impl CompanyDTO {
    pub fn new(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            link: company.link,
            mission_statement: company.mission_statement,
            logo: company.logo,
            registration: CompanyRegistrationDTO::new(company.registration),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRegistrationDTO {
    pub date: String,
    pub status: RegistrationStatus,
}

impl CompanyRegistrationDTO {
    pub fn new(registration: CompanyRegistration) -> Self {
        Self {
            date: registration.date,
            status: registration.status,
        }
    }
}

/// A `Company` as it is listed, without its registration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummaryDTO {
    pub id: ID,
    pub name: Option<String>,
    pub link: Option<String>,
    pub mission_statement: Option<String>,
    pub logo: Option<String>,
}

impl CompanySummaryDTO {
    pub fn new(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            link: company.link,
            mission_statement: company.mission_statement,
            logo: company.logo,
        }
    }
}
