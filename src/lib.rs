//! ArchMC Stats Dashboard - a thin caching proxy for the ArchMC statistics API
//!
//! Forwards browser requests upstream, caches responses briefly in memory,
//! reshapes player statistics for display, and serves the dashboard page.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod transform;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use upstream::ArchClient;
