//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use anyhow::Context;

/// Server configuration parameters.
///
/// The upstream API key is mandatory; everything else has a sensible default.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key sent to the upstream statistics API on every request
    pub api_key: String,
    /// Base URL of the upstream statistics API
    pub api_base: String,
    /// HTTP server port
    pub server_port: u16,
    /// Time-to-live in seconds for cached upstream responses
    pub cache_ttl: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `ARCH_API_KEY` - Upstream API key (required, startup fails if missing)
    /// - `ARCH_API_BASE` - Upstream base URL (default: `https://api.arch.mc/v1`)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL` - Response cache TTL in seconds (default: 120)
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("ARCH_API_KEY")
            .context("ARCH_API_KEY missing from environment")?;

        Ok(Self {
            api_key,
            api_base: env::var("ARCH_API_BASE")
                .unwrap_or_else(|_| "https://api.arch.mc/v1".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
        })
    }
}
