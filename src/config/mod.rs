use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// `json` for structured output, anything else for human-readable
    pub log_format: String,
}

/// Limits applied to analytics reports
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Number of artists kept in the artist leaderboard
    pub artist_leaderboard_size: usize,
    /// Upper bound on events (current + previous) in a single report request
    pub max_events_per_report: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            artist_leaderboard_size: 10,
            max_events_per_report: 10_000,
        }
    }
}

impl AnalyticsConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            artist_leaderboard_size: parse_env(
                "ARTIST_LEADERBOARD_SIZE",
                defaults.artist_leaderboard_size,
            )?,
            max_events_per_report: parse_env(
                "MAX_EVENTS_PER_REPORT",
                defaults.max_events_per_report,
            )?,
        })
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            },
            server: ServerConfig::from_env()?,
            analytics: AnalyticsConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::configuration("Server port must be greater than 0"));
        }

        if self.analytics.artist_leaderboard_size == 0 {
            return Err(AppError::configuration("Artist leaderboard size must be greater than 0"));
        }

        if self.analytics.max_events_per_report == 0 {
            return Err(AppError::configuration("Max events per report must be greater than 0"));
        }

        Ok(())
    }
}

/// Read `key`, falling back to `default` when unset
pub(crate) fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::configuration(format!("Invalid {}", key))),
        Err(_) => Ok(default),
    }
}
