//! Response DTOs for the dashboard API
//!
//! Defines the structure of outgoing HTTP response bodies. Raw upstream
//! payloads are passed through as `serde_json::Value` and have no DTO here.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cache::CacheStats;

/// Display-friendly player statistics (GET /api/player/:username)
///
/// Derived from the raw upstream payload by the transformer; immutable once
/// constructed.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerStatsView {
    /// The player the view was built for
    pub username: String,
    /// Precomputed summary lines; never empty
    pub highlights: Vec<String>,
    /// Per-mode statistics sub-maps, passed through unmodified
    pub modes: Map<String, Value>,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Response-cache counters
    pub cache: CacheStats,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy(cache: CacheStats) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            cache,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_stats_view_serialize() {
        let mut modes = Map::new();
        modes.insert("nodebuff".to_string(), json!({"kills": 3}));
        let view = PlayerStatsView {
            username: "alice".to_string(),
            highlights: vec!["Wins: 42".to_string()],
            modes,
        };

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["username"], "alice");
        assert_eq!(value["highlights"][0], "Wins: 42");
        assert_eq!(value["modes"]["nodebuff"]["kills"], 3);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy(CacheStats::new());
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
        assert!(json.contains("\"hits\":0"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
