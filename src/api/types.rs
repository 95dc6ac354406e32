//! Wire types for the two dashboard endpoints.

use serde::{Deserialize, Serialize};

/// One card's worth of aggregated content. Created by the backend, read-only
/// in the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// External link, when the item points somewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Source label as reported by the backend.
    pub source: String,
}

/// Response of `GET /api/content/{source}`. Item order is the backend's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentResponse {
    pub items: Vec<ContentItem>,
}

/// Response of `GET /api/weather`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub temperature: f64,
    pub icon: String,
}
