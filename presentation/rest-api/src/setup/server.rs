use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

/// Builds the full application endpoint: OpenAPI service, Swagger UI, spec
/// endpoint, CORS, and request tracing. Split out of `run` so black-box
/// tests can drive the app in-process.
pub fn build_app(config: AppConfig, container: DependencyContainer) -> impl Endpoint {
    let addr = config.server.bind_address();
    let api_service = OpenApiService::new(
        (
            container.health_api,
            container.cart_api,
            container.catalog_api,
        ),
        "Telecom Cart API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}", addr));
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .with(config.cors)
        .with(Tracing)
}

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = build_app(config, container);

        println!("Telecom Cart API running at http://{}", addr);
        println!("Swagger UI at http://{}/docs", addr);
        println!("OpenAPI JSON at http://{}/openapi.json", addr);

        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
