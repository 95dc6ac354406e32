//! Event System
//!
//! Types and implementations for fetch-task events and the status feed.

use crate::api::error::ApiError;
use crate::api::types::{ContentResponse, WeatherResponse};
use crate::cache::FetchKey;
use crate::logging::{should_log_with_env, LogLevel};
use chrono::Local;
use std::fmt::Display;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Fetcher {
    /// Task fetching per-source content.
    Content,
    /// Task fetching the weather snapshot.
    Weather,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

/// One line in the status feed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StatusEvent {
    pub fetcher: Fetcher,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl StatusEvent {
    fn new(fetcher: Fetcher, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            fetcher,
            msg,
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn content_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Fetcher::Content, msg, event_type, log_level)
    }

    pub fn weather_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Fetcher::Weather, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for StatusEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

/// Messages delivered from fetch tasks to the UI loop.
#[derive(Debug)]
pub enum Event {
    /// Outcome of a content fetch, tagged with the key it was issued for.
    /// The tag is what lets the UI loop discard stale results.
    Content {
        key: FetchKey,
        outcome: Result<ContentResponse, ApiError>,
    },
    /// Outcome of the weather fetch.
    Weather {
        outcome: Result<WeatherResponse, ApiError>,
    },
    /// A status feed entry.
    Status(StatusEvent),
}

/// Common event sending utilities for fetch tasks
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_content_status(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::Status(StatusEvent::content_with_level(
                message, event_type, log_level,
            )))
            .await;
    }

    pub async fn send_weather_status(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::Status(StatusEvent::weather_with_level(
                message, event_type, log_level,
            )))
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_events_always_display() {
        let event = StatusEvent::content_with_level(
            "Fetched".to_string(),
            EventType::Success,
            LogLevel::Debug,
        );
        assert!(event.should_display());
    }

    #[test]
    fn test_display_format() {
        let event = StatusEvent::weather_with_level(
            "Weather unavailable".to_string(),
            EventType::Error,
            LogLevel::Warn,
        );
        let text = event.to_string();
        assert!(text.starts_with("Error ["));
        assert!(text.ends_with("] Weather unavailable"));
    }
}
