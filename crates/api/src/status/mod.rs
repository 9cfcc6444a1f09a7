use actix_web::{web, HttpResponse};
use company_registry_api_structs::get_service_health::*;
use company_registry_infra::RegistryContext;

async fn status(ctx: web::Data<RegistryContext>) -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Yo! We are up!\r\n".into(),
        storage: ctx.config.storage.name().into(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
