use actix_web::{web, HttpResponse};
use tracing::info;

use crate::modules::events::models::{ComputedEventMetrics, RawFinancialRecord};
use crate::modules::events::services::DerivedMetricsEngine;

/// POST /api/events/metrics
///
/// Computes derived metrics for one event's raw financial record. Missing
/// fields are zero-defaulted, so any well-formed JSON object succeeds.
pub async fn calculate_event_metrics(body: web::Json<RawFinancialRecord>) -> HttpResponse {
    let metrics: ComputedEventMetrics = DerivedMetricsEngine::compute_raw(&body);

    info!(
        net_event_income = %metrics.net_event_income,
        total_gross_revenue = %metrics.total_gross_revenue,
        "Event metrics calculated"
    );

    HttpResponse::Ok().json(metrics)
}

/// Configure event routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/events").route("/metrics", web::post().to(calculate_event_metrics)),
    );
}
