use company_registry_api::Application;
use company_registry_infra::RegistryContext;
use company_registry_sdk::RegistrySDK;

// Launch the application with its own inmemory storage as a background task
pub async fn spawn_app() -> RegistrySDK {
    let mut ctx = RegistryContext::create_inmemory();
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    RegistrySDK::new(address)
}
