//! Configuration management for the Aahar backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: AAHAR__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub limits: InputLimits,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

/// Bounds the calculator form accepts, checked before the calculator runs
///
/// These sit on top of the calculator's own positivity checks and only
/// apply to HTTP callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputLimits {
    pub min_weight_kg: f64,
    pub max_weight_kg: f64,
    pub min_height_cm: f64,
    pub max_height_cm: f64,
    pub min_age: i32,
    pub max_age: i32,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_weight_kg: 1.0,
            max_weight_kg: 300.0,
            min_height_cm: 50.0,
            max_height_cm: 300.0,
            min_age: 1,
            max_age: 120,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                request_timeout_secs: 30,
            },
            limits: InputLimits::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with AAHAR__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (AAHAR__ prefix)
            // e.g., AAHAR__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("AAHAR").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
