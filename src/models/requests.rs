//! Request DTOs for the dashboard API
//!
//! Defines the query-parameter structures of incoming HTTP requests.

use serde::Deserialize;

/// Query parameters for GET /api/player/:username
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerStatsQuery {
    /// Optional statistics filter, forwarded verbatim to the upstream API
    #[serde(default)]
    pub filter: Option<String>,
}

/// Pagination parameters for guild list and leaderboard endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
}

impl PageQuery {
    /// Renders the pagination into upstream query parameters.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            params.push(("size", size.to_string()));
        }
        params
    }

    /// Renders the pagination into a cache-key suffix.
    pub fn cache_suffix(&self) -> String {
        format!(
            "{}:{}",
            self.page.map(|v| v.to_string()).unwrap_or_default(),
            self.size.map(|v| v.to_string()).unwrap_or_default()
        )
    }
}

/// Query parameters for GET /api/guilds/search
#[derive(Debug, Clone, Deserialize)]
pub struct GuildSearchQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl GuildSearchQuery {
    /// Validates the query parameters.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.is_none() && self.description.is_none() {
            return Some("either 'name' or 'description' must be provided".to_string());
        }
        None
    }
}
