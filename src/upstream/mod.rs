//! Upstream Module
//!
//! HTTP client for the external ArchMC statistics API.

mod client;

pub use client::ArchClient;
