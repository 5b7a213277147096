//! API Routes
//!
//! Configures the Axum router with all dashboard endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    baltop_currency_handler, baltop_handler, dashboard_handler, guild_list_handler,
    guild_search_handler, health_handler, leaderboard_handler, player_economy_handler,
    player_guild_handler, player_stats_handler, statistics_catalog_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin, matching the original dashboard deployment
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/health", get(health_handler))
        .route("/api/player/:username", get(player_stats_handler))
        .route("/api/economy", get(baltop_handler))
        .route("/api/economy/:username", get(player_economy_handler))
        .route("/api/economy/baltop/:currency", get(baltop_currency_handler))
        .route("/api/guilds", get(guild_list_handler))
        .route("/api/guilds/search", get(guild_search_handler))
        .route("/api/guilds/player/:username", get(player_guild_handler))
        .route("/api/leaderboards/:statistic_id", get(leaderboard_handler))
        .route("/api/statistics", get(statistics_catalog_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
