use serde::Deserialize;
use std::env;

use crate::config::parse_env;
use crate::core::{AppError, Result};

/// Server configuration for HTTP server
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: default_workers(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_env("SERVER_PORT", 8080u16)?;
        let workers = parse_env("SERVER_WORKERS", default_workers())?;

        if workers == 0 {
            return Err(AppError::configuration("SERVER_WORKERS must be greater than 0"));
        }

        Ok(Self {
            host,
            port,
            workers,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Calculation is CPU-bound; one worker per core
fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
