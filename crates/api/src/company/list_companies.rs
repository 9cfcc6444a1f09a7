use crate::{
    error::RegistryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use company_registry_api_structs::list_companies::new_response;
use company_registry_domain::Company;
use company_registry_infra::RegistryContext;
use tracing::error;

pub async fn list_companies_controller(
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    let usecase = RetrieveActiveCompaniesUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|companies| HttpResponse::Ok().json(new_response(companies)))
        .map_err(RegistryError::from)
}

/// Lists every registered `Company`.
///
/// Despite the name no company is filtered out by its registration
/// status. Whether "active" should mean `Accepted` is still undecided.
#[derive(Debug)]
pub struct RetrieveActiveCompaniesUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for RegistryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::StorageUnavailable,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RetrieveActiveCompaniesUseCase {
    type Response = Vec<Company>;

    type Error = UseCaseError;

    const NAME: &'static str = "RetrieveActiveCompanies";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .companies
            .find_all()
            .await
            .map_err(|e| {
                error!("Unable to fetch companies: {:?}", e);
                UseCaseError::StorageError
            })
    }
}
