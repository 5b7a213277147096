//! Data Transformer Module
//!
//! Reshapes raw player statistics into a display-friendly view with
//! precomputed highlight lines and per-mode sub-maps.

use serde_json::Value;

use crate::models::PlayerStatsView;

/// Statistic key backing the "Wins" highlight
const WINS_KEY: &str = "wins:global:casual:lifetime";

/// Statistic key backing the "ELO" highlight
const ELO_KEY: &str = "elo:nodebuff:ranked:lifetime";

/// Shown when no highlight rule matched the payload
const NO_HIGHLIGHTS: &str = "No highlights available";

// == Player Stats View ==
/// Builds a `PlayerStatsView` from a raw upstream statistics payload.
///
/// Highlights are derived from the two known statistic keys; every key whose
/// value is itself a JSON object is copied into `modes` unchanged. Scalar
/// keys that match no highlight rule are dropped from the view.
pub fn player_stats_view(username: &str, raw: &Value) -> PlayerStatsView {
    let mut highlights = Vec::new();
    if let Some(wins) = raw.get(WINS_KEY) {
        highlights.push(format!("Wins: {wins}"));
    }
    if let Some(elo) = raw.get(ELO_KEY) {
        highlights.push(format!("ELO: {elo}"));
    }
    if highlights.is_empty() {
        highlights.push(NO_HIGHLIGHTS.to_string());
    }

    let modes = raw
        .as_object()
        .map(|fields| {
            fields
                .iter()
                .filter(|(_, v)| v.is_object())
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
        .unwrap_or_default();

    PlayerStatsView {
        username: username.to_string(),
        highlights,
        modes,
    }
}
