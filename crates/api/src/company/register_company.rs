use crate::{
    error::RegistryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use company_registry_api_structs::register_company::{APIResponse, RequestBody};
use company_registry_domain::{Company, CompanyRegistration, ID};
use company_registry_infra::RegistryContext;
use company_registry_utils::format_datetime;
use tracing::error;

pub async fn register_company_controller(
    ctx: web::Data<RegistryContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, RegistryError> {
    let body = body.into_inner();
    let usecase = CreateCompanyUseCase {
        name: body.name,
        link: body.website,
        mission_statement: body.mission_statement,
        logo: body.logo,
    };

    execute(usecase, &ctx)
        .await
        .map(|company| HttpResponse::Created().json(APIResponse::new(company)))
        .map_err(RegistryError::from)
}

/// Registers a new `Company`. Identity and registration are always
/// assigned here and nowhere else.
#[derive(Debug)]
pub struct CreateCompanyUseCase {
    pub name: Option<String>,
    pub link: Option<String>,
    pub mission_statement: Option<String>,
    pub logo: Option<String>,
}

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
impl UseCase for CreateCompanyUseCase {
    type Response = Company;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCompany";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        let registration_date = format_datetime(&ctx.sys.now(), None);
        let company = Company {
            id: ID::new(),
            name: self.name.clone(),
            link: self.link.clone(),
            mission_statement: self.mission_statement.clone(),
            logo: self.logo.clone(),
            registration: CompanyRegistration::new(registration_date),
        };

        match ctx.repos.companies.persist(&company).await {
            Ok(_) => Ok(company),
            Err(e) => {
                error!("Unable to persist company {}: {:?}", company.id, e);
                Err(UseCaseError::StorageError)
            }
        }
    }
}
