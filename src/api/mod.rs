//! API Module
//!
//! HTTP handlers and routing for the dashboard proxy.
//!
//! # Endpoints
//! - `GET /api/player/:username` - Transformed player statistics (cached)
//! - `GET /api/economy` - Balance top list (cached)
//! - `GET /api/economy/:username` - Player economy (cached)
//! - `GET /api/economy/baltop/:currency` - Balance top by currency (cached)
//! - `GET /api/guilds` - Paginated guild list (cached)
//! - `GET /api/guilds/search` - Guild search by name/description (cached)
//! - `GET /api/guilds/player/:username` - Guild for a player
//! - `GET /api/leaderboards/:statistic_id` - Leaderboard for a statistic
//! - `GET /api/statistics` - Statistics catalog
//! - `GET /` - Embedded HTML dashboard
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
