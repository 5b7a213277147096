//! API Handlers
//!
//! HTTP request handlers for each dashboard endpoint. Cached endpoints run
//! the same pipeline: check the cache, on miss fetch from upstream, store
//! the result, respond.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde_json::Value;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::models::{GuildSearchQuery, HealthResponse, PageQuery, PlayerStatsQuery};
use crate::transform::player_stats_view;
use crate::upstream::ArchClient;

/// Embedded single-page dashboard client.
const DASHBOARD_HTML: &str = include_str!("dashboard.html");

/// Application state shared across all handlers.
///
/// Owns the response cache and the upstream client; created at startup and
/// dropped on shutdown.
#[derive(Clone)]
pub struct AppState {
    /// Shared response cache
    pub cache: Arc<RwLock<ResponseCache>>,
    /// Client for the upstream statistics API
    pub upstream: ArchClient,
    /// TTL in seconds applied to every cache write
    pub cache_ttl: u64,
}

impl AppState {
    /// Creates a new AppState with an empty cache.
    pub fn new(upstream: ArchClient, cache_ttl: u64) -> Self {
        Self {
            cache: Arc::new(RwLock::new(ResponseCache::new())),
            upstream,
            cache_ttl,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let upstream = ArchClient::new(config.api_base.clone(), config.api_key.clone());
        Self::new(upstream, config.cache_ttl)
    }

    /// Cache-or-fetch pipeline shared by the cached passthrough endpoints.
    ///
    /// The lock is released before awaiting the upstream call, so concurrent
    /// misses for the same key may both fetch; last write wins.
    async fn fetch_cached(&self, key: &str, path: &str, query: &[(&str, String)]) -> Result<Value> {
        // Write lock: a read updates the hit/miss counters
        if let Some(hit) = self.cache.write().await.get(key) {
            return Ok(hit);
        }

        let value = self.upstream.fetch(path, query).await?;
        self.cache
            .write()
            .await
            .set(key.to_string(), value.clone(), self.cache_ttl);
        Ok(value)
    }
}

/// Handler for GET /api/player/:username
///
/// Returns the transformed player statistics view. The optional `filter`
/// query parameter is forwarded upstream and keyed into the cache so
/// differently filtered views do not collide.
pub async fn player_stats_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<PlayerStatsQuery>,
) -> Result<Json<Value>> {
    let key = match &query.filter {
        Some(filter) => format!("player:{username}:{filter}"),
        None => format!("player:{username}"),
    };
    if let Some(hit) = state.cache.write().await.get(&key) {
        return Ok(Json(hit));
    }

    let mut params = Vec::new();
    if let Some(filter) = query.filter {
        params.push(("filter", filter));
    }
    let raw = state
        .upstream
        .fetch(&format!("/players/username/{username}/statistics"), &params)
        .await?;

    let view = player_stats_view(&username, &raw);
    let value =
        serde_json::to_value(&view).map_err(|e| DashboardError::Internal(e.to_string()))?;
    state
        .cache
        .write()
        .await
        .set(key, value.clone(), state.cache_ttl);
    Ok(Json(value))
}

/// Handler for GET /api/economy/:username
///
/// Returns the raw economy payload for a player.
pub async fn player_economy_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Value>> {
    let value = state
        .fetch_cached(
            &format!("economy:{username}"),
            &format!("/economy/player/username/{username}"),
            &[],
        )
        .await?;
    Ok(Json(value))
}

/// Handler for GET /api/economy
///
/// With no username the endpoint serves the overall balance top list.
pub async fn baltop_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    let value = state.fetch_cached("baltop", "/economy/baltop", &[]).await?;
    Ok(Json(value))
}

/// Handler for GET /api/economy/baltop/:currency
pub async fn baltop_currency_handler(
    State(state): State<AppState>,
    Path(currency): Path<String>,
) -> Result<Json<Value>> {
    let value = state
        .fetch_cached(
            &format!("baltop:{currency}"),
            &format!("/economy/baltop/{currency}"),
            &[],
        )
        .await?;
    Ok(Json(value))
}

/// Handler for GET /api/guilds
///
/// Returns the paginated guild list.
pub async fn guild_list_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>> {
    let value = state
        .fetch_cached(
            &format!("guilds:{}", query.cache_suffix()),
            "/guilds",
            &query.to_params(),
        )
        .await?;
    Ok(Json(value))
}

/// Handler for GET /api/guilds/search
///
/// Fails with HTTP 400 when neither `name` nor `description` is given.
pub async fn guild_search_handler(
    State(state): State<AppState>,
    Query(query): Query<GuildSearchQuery>,
) -> Result<Json<Value>> {
    if let Some(error_msg) = query.validate() {
        return Err(DashboardError::BadRequest(error_msg));
    }

    let name = query.name.unwrap_or_default();
    let description = query.description.unwrap_or_default();
    let mut params = Vec::new();
    if !name.is_empty() {
        params.push(("name", name.clone()));
    }
    if !description.is_empty() {
        params.push(("description", description.clone()));
    }

    let value = state
        .fetch_cached(
            &format!("guilds:search:{name}:{description}"),
            "/guilds/search",
            &params,
        )
        .await?;
    Ok(Json(value))
}

/// Handler for GET /api/guilds/player/:username
///
/// Uncached: guild membership changes too often to be worth a TTL window.
pub async fn player_guild_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Value>> {
    let value = state
        .upstream
        .fetch(&format!("/guilds/player/username/{username}"), &[])
        .await?;
    Ok(Json(value))
}

/// Handler for GET /api/leaderboards/:statistic_id (uncached)
pub async fn leaderboard_handler(
    State(state): State<AppState>,
    Path(statistic_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>> {
    let value = state
        .upstream
        .fetch(&format!("/leaderboards/{statistic_id}"), &query.to_params())
        .await?;
    Ok(Json(value))
}

/// Handler for GET /api/statistics (uncached)
///
/// Returns the full statistics catalog.
pub async fn statistics_catalog_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    let value = state.upstream.fetch("/statistics", &[]).await?;
    Ok(Json(value))
}

/// Handler for GET /
///
/// Serves the embedded HTML+JS dashboard page.
pub async fn dashboard_handler() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// Handler for GET /health
///
/// Returns health status plus the cache counters.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.cache.read().await.stats();
    Json(HealthResponse::healthy(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_state() -> AppState {
        // Upstream is unreachable; tests that hit it expect a transport error
        let upstream = ArchClient::new("http://127.0.0.1:9".to_string(), "test-key".to_string());
        AppState::new(upstream, 120)
    }

    #[tokio::test]
    async fn test_guild_search_without_params_is_bad_request() {
        let query = GuildSearchQuery {
            name: None,
            description: None,
        };
        let result = guild_search_handler(State(test_state()), Query(query)).await;
        assert!(matches!(result, Err(DashboardError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_player_stats_served_from_cache() {
        let state = test_state();
        {
            let mut cache = state.cache.write().await;
            cache.set(
                "player:alice".to_string(),
                json!({"username": "alice", "highlights": ["Wins: 42"], "modes": {}}),
                120,
            );
        }

        // Upstream is unreachable, so a hit is the only way this succeeds
        let result = player_stats_handler(
            State(state),
            Path("alice".to_string()),
            Query(PlayerStatsQuery { filter: None }),
        )
        .await;

        let Json(value) = result.unwrap();
        assert_eq!(value["highlights"][0], "Wins: 42");
    }

    #[tokio::test]
    async fn test_filtered_player_stats_use_distinct_key() {
        let state = test_state();
        {
            let mut cache = state.cache.write().await;
            cache.set("player:alice".to_string(), json!({"cached": true}), 120);
        }

        // The filtered request misses "player:alice" and goes upstream
        let result = player_stats_handler(
            State(state),
            Path("alice".to_string()),
            Query(PlayerStatsQuery {
                filter: Some("ranked".to_string()),
            }),
        )
        .await;

        assert!(matches!(result, Err(DashboardError::Transport(_))));
    }

    #[tokio::test]
    async fn test_uncached_endpoint_surfaces_transport_error() {
        let result = statistics_catalog_handler(State(test_state())).await;
        assert!(matches!(result, Err(DashboardError::Transport(_))));
    }

    #[tokio::test]
    async fn test_health_handler_reports_cache_counters() {
        let state = test_state();
        state.cache.write().await.get("anything"); // one miss

        let Json(response) = health_handler(State(state)).await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.cache.misses, 1);
    }
}
