//! Request and Response models for the dashboard API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing query parameters and serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{GuildSearchQuery, PageQuery, PlayerStatsQuery};
pub use responses::{ErrorResponse, HealthResponse, PlayerStatsView};
