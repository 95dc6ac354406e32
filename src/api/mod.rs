use crate::api::error::ApiError;
use crate::api::types::{ContentResponse, WeatherResponse};
use crate::source::Source;
use chrono::NaiveDate;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Fetch aggregated content for one source. `date` is optional; omitted
    /// means whatever the backend considers today.
    async fn fetch_content(
        &self,
        source: Source,
        date: Option<NaiveDate>,
    ) -> Result<ContentResponse, ApiError>;

    /// Fetch the current weather snapshot.
    async fn fetch_weather(&self) -> Result<WeatherResponse, ApiError>;
}
