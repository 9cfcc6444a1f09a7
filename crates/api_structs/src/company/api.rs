use crate::dtos::{CompanyDTO, CompanySummaryDTO};
use company_registry_domain::Company;
use serde::{Deserialize, Serialize};

pub mod register_company {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: Option<String>,
        pub website: Option<String>,
        pub mission_statement: Option<String>,
        pub logo: Option<String>,
    }

    pub type APIResponse = CompanyDTO;
}

pub mod list_companies {
    use super::*;

    pub type APIResponse = Vec<CompanySummaryDTO>;

    pub fn new_response(companies: Vec<Company>) -> APIResponse {
        companies.into_iter().map(CompanySummaryDTO::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use company_registry_domain::{CompanyRegistration, ID};
    use serde_json::json;

    fn acme() -> Company {
        Company {
            id: ID::new(),
            name: Some("Acme".into()),
            link: Some("acme.com".into()),
            mission_statement: Some("Build things".into()),
            logo: Some("acme.png".into()),
            registration: CompanyRegistration::new("2021-03-14 09:26:53".into()),
        }
    }

    #[test]
    fn register_response_includes_registration() {
        let company = acme();
        let id = company.id.to_string();
        let body = serde_json::to_value(CompanyDTO::new(company)).unwrap();
        assert_eq!(
            body,
            json!({
                "id": id,
                "name": "Acme",
                "link": "acme.com",
                "missionStatement": "Build things",
                "logo": "acme.png",
                "registration": {
                    "date": "2021-03-14 09:26:53",
                    "status": "ACCEPTED"
                }
            })
        );
    }

    #[test]
    fn list_response_omits_registration() {
        let company = acme();
        let id = company.id.to_string();
        let body = serde_json::to_value(list_companies::new_response(vec![company])).unwrap();
        assert_eq!(
            body,
            json!([{
                "id": id,
                "name": "Acme",
                "link": "acme.com",
                "missionStatement": "Build things",
                "logo": "acme.png"
            }])
        );
    }

    #[test]
    fn register_request_fields_are_optional() {
        let body: register_company::RequestBody =
            serde_json::from_value(json!({ "name": "Acme", "missionStatement": null })).unwrap();
        assert_eq!(body.name.as_deref(), Some("Acme"));
        assert!(body.website.is_none());
        assert!(body.mission_statement.is_none());
        assert!(body.logo.is_none());
    }
}
