// Test Server Helpers
//
// Spawns a real HTTP test server using actix-test with the same routes,
// middleware and JSON configuration as the production binary.

use actix_web::{web, App, HttpResponse};

pub use actix_test::TestServer;

use encore::config::AnalyticsConfig;
use encore::middleware::{json_error_handler, RequestId};
use encore::reports::ReportService;

/// Spawn a real HTTP test server with default analytics configuration
///
/// Server stops automatically when the returned TestServer drops.
pub fn spawn_test_server() -> TestServer {
    spawn_test_server_with_config(AnalyticsConfig::default())
}

/// Spawn a test server with custom analytics limits
pub fn spawn_test_server_with_config(config: AnalyticsConfig) -> TestServer {
    let report_service = web::Data::new(ReportService::new(config));

    actix_test::start(move || {
        App::new()
            .wrap(RequestId)
            .app_data(report_service.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route(
                "/health",
                web::get().to(|| async {
                    HttpResponse::Ok().json(serde_json::json!({"status": "healthy"}))
                }),
            )
            .configure(encore::configure_api)
    })
}
