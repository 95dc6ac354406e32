//! Network client with built-in retry and error handling
//!
//! Wraps the raw API client in the bounded retry policy: a fetch makes at
//! most `fetching::MAX_ATTEMPTS` requests, backing off exponentially between
//! them, then surfaces the last error to the caller. Which errors are worth
//! a second request is decided by the [`ErrorHandler`].

use super::error_handler::ErrorHandler;
use crate::api::error::ApiError;
use crate::api::types::{ContentResponse, WeatherResponse};
use crate::api::Backend;
use crate::cache::FetchKey;
use crate::consts::cli_consts::fetching;
use crate::events::{EventSender, EventType};

use std::time::Duration;
use tokio::time::sleep;

/// Network client with built-in retry and backoff
pub struct NetworkClient {
    error_handler: ErrorHandler,
    max_attempts: u32,
    initial_backoff: Duration,
}

impl NetworkClient {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            error_handler: ErrorHandler::new(),
            max_attempts,
            initial_backoff: fetching::initial_backoff(),
        }
    }

    /// Override the backoff base. Tests use a zero backoff.
    pub fn with_backoff(mut self, initial_backoff: Duration) -> Self {
        self.initial_backoff = initial_backoff;
        self
    }

    /// Delay before the next attempt, doubling per recorded failure.
    fn backoff_after(&self, failures: u32) -> Duration {
        self.initial_backoff * 2u32.saturating_pow(failures.saturating_sub(1))
    }

    /// Fetch content for one key with automatic retry
    pub async fn fetch_content(
        &self,
        backend: &dyn Backend,
        key: FetchKey,
        events: &EventSender,
    ) -> Result<ContentResponse, ApiError> {
        let mut attempts = 0;

        loop {
            match backend.fetch_content(key.source, Some(key.date)).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    attempts += 1;

                    // Give up once the budget is spent or the error class
                    // cannot improve on retry
                    if attempts >= self.max_attempts || !self.error_handler.should_retry(&e) {
                        return Err(e);
                    }

                    let delay = self.backoff_after(attempts);
                    events
                        .send_content_status(
                            format!(
                                "Retrying {} in {}ms: {}",
                                key,
                                delay.as_millis(),
                                e
                            ),
                            EventType::Waiting,
                            self.error_handler.classify_error(&e),
                        )
                        .await;
                    sleep(delay).await;
                }
            }
        }
    }

    /// Fetch the weather snapshot with automatic retry
    pub async fn fetch_weather(
        &self,
        backend: &dyn Backend,
        events: &EventSender,
    ) -> Result<WeatherResponse, ApiError> {
        let mut attempts = 0;

        loop {
            match backend.fetch_weather().await {
                Ok(weather) => return Ok(weather),
                Err(e) => {
                    attempts += 1;

                    if attempts >= self.max_attempts || !self.error_handler.should_retry(&e) {
                        return Err(e);
                    }

                    let delay = self.backoff_after(attempts);
                    events
                        .send_weather_status(
                            format!("Retrying weather in {}ms: {}", delay.as_millis(), e),
                            EventType::Waiting,
                            self.error_handler.classify_error(&e),
                        )
                        .await;
                    sleep(delay).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockBackend;
    use crate::source::Source;
    use chrono::NaiveDate;
    use tokio::sync::mpsc;

    fn test_key() -> FetchKey {
        FetchKey::new(
            Source::HackerNews,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    fn test_sender() -> EventSender {
        let (tx, _rx) = mpsc::channel(16);
        EventSender::new(tx)
    }

    fn server_error() -> ApiError {
        ApiError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    }

    fn client() -> NetworkClient {
        NetworkClient::new(fetching::MAX_ATTEMPTS).with_backoff(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_two_server_errors_exhaust_the_budget() {
        let mut backend = MockBackend::new();
        backend
            .expect_fetch_content()
            .times(fetching::MAX_ATTEMPTS as usize)
            .returning(|_, _| Err(server_error()));

        let result = client()
            .fetch_content(&backend, test_key(), &test_sender())
            .await;
        match result {
            Err(ApiError::Http { status, .. }) => assert_eq!(status, 500),
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_retry_recovers_from_one_failure() {
        let mut backend = MockBackend::new();
        let mut calls = 0;
        backend.expect_fetch_content().times(2).returning(move |_, _| {
            calls += 1;
            if calls == 1 {
                Err(server_error())
            } else {
                Ok(ContentResponse { items: vec![] })
            }
        });

        let result = client()
            .fetch_content(&backend, test_key(), &test_sender())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let mut backend = MockBackend::new();
        backend.expect_fetch_content().times(1).returning(|_, _| {
            Err(ApiError::Http {
                status: 404,
                message: "Source 'paper' not found".to_string(),
            })
        });

        let result = client()
            .fetch_content(&backend, test_key(), &test_sender())
            .await;
        assert!(matches!(result, Err(ApiError::Http { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_weather_retries_like_content() {
        let mut backend = MockBackend::new();
        let mut calls = 0;
        backend.expect_fetch_weather().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Err(server_error())
            } else {
                Ok(WeatherResponse {
                    temperature: 20.0,
                    icon: "sunny".to_string(),
                })
            }
        });

        let result = client().fetch_weather(&backend, &test_sender()).await;
        assert_eq!(result.unwrap().temperature, 20.0);
    }

    #[test]
    fn test_backoff_doubles_per_failure() {
        let client = NetworkClient::new(3).with_backoff(Duration::from_millis(500));
        assert_eq!(client.backoff_after(1), Duration::from_millis(500));
        assert_eq!(client.backoff_after(2), Duration::from_millis(1000));
        assert_eq!(client.backoff_after(3), Duration::from_millis(2000));
    }
}
