use actix_web::{error::ResponseError, web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use tracing::error;

use crate::core::Result;
use crate::modules::reports::models::{AnalyticsReport, ReportRequest, ResolvedWindows};
use crate::modules::reports::services::{ReportService, TimeWindowResolver};

/// Query parameters for the window endpoint
#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    /// week | month | quarter | year | all
    #[serde(default)]
    pub timeframe: Option<String>,
    /// Explicit range start (RFC 3339 or YYYY-MM-DD)
    #[serde(default)]
    pub start: Option<String>,
    /// Explicit range end (RFC 3339 or YYYY-MM-DD)
    #[serde(default)]
    pub end: Option<String>,
}

/// POST /reports/analytics
///
/// Builds the dashboard report from caller-filtered events for the current
/// and the comparison window.
pub async fn get_analytics_report(
    service: web::Data<ReportService>,
    body: web::Json<ReportRequest>,
) -> HttpResponse {
    match handle_get_analytics_report(&service, &body) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => {
            error!("Failed to generate analytics report: {}", e);
            e.error_response()
        }
    }
}

fn handle_get_analytics_report(
    service: &ReportService,
    request: &ReportRequest,
) -> Result<AnalyticsReport> {
    service.generate(request, Utc::now())
}

/// GET /reports/window
///
/// Resolves a timeframe to the current and comparison windows so callers
/// can select events before requesting a report.
pub async fn get_report_window(query: web::Query<WindowQuery>) -> HttpResponse {
    match handle_get_report_window(&query) {
        Ok(windows) => HttpResponse::Ok().json(windows),
        Err(e) => {
            error!("Failed to resolve report window: {}", e);
            e.error_response()
        }
    }
}

fn handle_get_report_window(query: &WindowQuery) -> Result<ResolvedWindows> {
    let timeframe = TimeWindowResolver::parse_selector(
        query.timeframe.as_deref(),
        query.start.as_deref(),
        query.end.as_deref(),
    )?;
    TimeWindowResolver::resolve(timeframe, Utc::now())
}

/// Configure report routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/analytics", web::post().to(get_analytics_report))
            .route("/window", web::get().to(get_report_window)),
    );
}
