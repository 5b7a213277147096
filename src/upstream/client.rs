//! Upstream Client Module
//!
//! Issues authenticated GET requests against the statistics API and
//! normalizes transport and HTTP failures into `DashboardError`.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{DashboardError, Result};

/// Header carrying the upstream API key
const API_KEY_HEADER: &str = "X-API-KEY";

// == Arch Client ==
/// Client for the ArchMC statistics API.
///
/// Every request is a single attempt with the static API key attached;
/// there is no retry or backoff. Timeouts are whatever reqwest defaults to.
#[derive(Debug, Clone)]
pub struct ArchClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ArchClient {
    // == Constructor ==
    /// Creates a new client for the given base URL and API key.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    // == Fetch ==
    /// Issues a GET against `base_url + path` with the given query parameters.
    ///
    /// Returns the response body parsed as JSON. Non-success statuses become
    /// `DashboardError::Upstream` carrying the upstream status and body text;
    /// connection failures become `DashboardError::Transport`.
    pub async fn fetch(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching from upstream");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
