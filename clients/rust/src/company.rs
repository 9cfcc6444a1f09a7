use crate::{APIResponse, BaseClient};
use company_registry_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CompanyClient {
    base: Arc<BaseClient>,
}

#[derive(Debug, Default, Clone)]
pub struct RegisterCompanyInput {
    pub name: Option<String>,
    pub website: Option<String>,
    pub mission_statement: Option<String>,
    pub logo: Option<String>,
}

impl CompanyClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn register(
        &self,
        input: RegisterCompanyInput,
    ) -> APIResponse<register_company::APIResponse> {
        let body = register_company::RequestBody {
            name: input.name,
            website: input.website,
            mission_statement: input.mission_statement,
            logo: input.logo,
        };
        self.base.post(body, "company", StatusCode::CREATED).await
    }

    pub async fn list(&self) -> APIResponse<list_companies::APIResponse> {
        self.base.get("company", StatusCode::OK).await
    }
}
