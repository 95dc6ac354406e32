//! Dashboard API Client
//!
//! A client for the nook backend, covering the two read-only dashboard
//! endpoints: per-source content and the weather snapshot.

use crate::api::error::ApiError;
use crate::api::types::{ContentResponse, WeatherResponse};
use crate::api::Backend;
use crate::consts::cli_consts::fetching;
use crate::environment::Environment;
use crate::source::Source;
use chrono::NaiveDate;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with dashboard version
const USER_AGENT: &str = concat!("nook-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Self {
        Self::with_base_url(environment.api_base_url())
    }

    /// Client pointed at an explicit base URL. Used for non-standard
    /// deployments and by tests against a local mock server.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(fetching::request_timeout())
                .timeout(fetching::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            base_url,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .query(query)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        serde_json::from_slice(&response_bytes).map_err(ApiError::Decode)
    }
}

#[async_trait::async_trait]
impl Backend for ApiClient {
    async fn fetch_content(
        &self,
        source: Source,
        date: Option<NaiveDate>,
    ) -> Result<ContentResponse, ApiError> {
        let endpoint = format!("api/content/{}", source.slug());
        let mut query = Vec::new();
        if let Some(date) = date {
            query.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        self.get_request(&endpoint, &query).await
    }

    async fn fetch_weather(&self) -> Result<WeatherResponse, ApiError> {
        self.get_request("api/weather", &[]).await
    }
}
