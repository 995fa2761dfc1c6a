//! Encore event financial engine
//!
//! Per-event financial calculation (payout, revenue and expense waterfalls,
//! derived ratios) and time-windowed analytics aggregation for venue
//! operations dashboards.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::events;
pub use modules::reports;

use actix_web::web;

/// Mount every API route under `/api`
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(events::controllers::configure)
            .configure(reports::controllers::configure),
    );
}
