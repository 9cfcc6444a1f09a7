mod list_companies;
mod register_company;

use actix_web::web;
use list_companies::list_companies_controller;
use register_company::register_company_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/company", web::post().to(register_company_controller));
    cfg.route("/company", web::get().to(list_companies_controller));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_config;
    use actix_web::{http::StatusCode, test as actix_test, App};
    use company_registry_api_structs::{list_companies, register_company};
    use company_registry_infra::RegistryContext;

    #[actix_web::main]
    #[test]
    async fn it_registers_and_lists_over_http() {
        let ctx = RegistryContext::create_inmemory();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(ctx))
                .app_data(json_config())
                .configure(configure_routes),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/company")
            .set_json(register_company::RequestBody {
                name: Some("Acme".into()),
                website: Some("acme.com".into()),
                mission_statement: Some("Build things".into()),
                logo: Some("acme.png".into()),
            })
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let company: register_company::APIResponse = actix_test::read_body_json(resp).await;
        assert_eq!(company.link.as_deref(), Some("acme.com"));

        let req = actix_test::TestRequest::get().uri("/company").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let companies: list_companies::APIResponse = actix_test::read_body_json(resp).await;
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].id, company.id);
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_malformed_body() {
        let ctx = RegistryContext::create_inmemory();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(ctx))
                .app_data(json_config())
                .configure(configure_routes),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/company")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
