pub mod controllers;
pub mod models;
pub mod services;

pub use models::{AnalyticsReport, ReportRequest};
pub use services::ReportService;
