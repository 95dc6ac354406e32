//! Content and weather fetch tasks.
//!
//! The UI loop never blocks on the network: each fetch runs as a spawned
//! task that pushes its outcome back over the event channel, tagged with the
//! key it was issued for. Retry happens inside the task, so the outcome the
//! UI sees is final.

use crate::api::Backend;
use crate::cache::FetchKey;
use crate::consts::cli_consts::fetching;
use crate::events::{Event, EventSender, EventType};
use crate::logging::LogLevel;
use crate::network::NetworkClient;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Spawns a fetch for one (source, date) key.
pub fn spawn_content_fetch(
    backend: Arc<dyn Backend>,
    key: FetchKey,
    events: EventSender,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        events
            .send_content_status(
                format!("Fetching {}...", key),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        let network_client = NetworkClient::new(fetching::MAX_ATTEMPTS);
        let outcome = network_client
            .fetch_content(backend.as_ref(), key, &events)
            .await;

        match &outcome {
            Ok(response) => {
                events
                    .send_content_status(
                        format!("Got {} item(s) for {}", response.items.len(), key),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
            }
            Err(e) => {
                log::warn!("content fetch for {} failed: {}", key, e);
                events
                    .send_content_status(
                        format!("Failed to load {}: {}", key, e),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
            }
        }

        events.send_event(Event::Content { key, outcome }).await;
    })
}

/// Spawns the weather fetch. A failure degrades to an absent widget, so the
/// status feed only hears about it at debug level.
pub fn spawn_weather_fetch(backend: Arc<dyn Backend>, events: EventSender) -> JoinHandle<()> {
    tokio::spawn(async move {
        let network_client = NetworkClient::new(fetching::MAX_ATTEMPTS);
        let outcome = network_client.fetch_weather(backend.as_ref(), &events).await;

        if let Err(e) = &outcome {
            log::debug!("weather fetch failed: {}", e);
            events
                .send_weather_status(
                    format!("Weather unavailable: {}", e),
                    EventType::Error,
                    LogLevel::Debug,
                )
                .await;
        }

        events.send_event(Event::Weather { outcome }).await;
    })
}
