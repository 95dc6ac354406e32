//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::api::types::{ContentItem, WeatherResponse};
use crate::cache::{FetchCache, FetchKey, FetchState};
use crate::consts::cli_consts::{DATE_WINDOW_DAYS, MAX_STATUS_EVENTS};
use crate::environment::Environment;
use crate::events::{Event, StatusEvent};
use crate::source::Source;
use crate::theme::Theme;

use chrono::NaiveDate;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Instant;

/// State of the weather widget, independent of the content feed.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherState {
    Loading,
    Ready(WeatherResponse),
    /// The fetch failed; the widget renders nothing.
    Missing,
}

/// What the content area should show for the current fetch key.
#[derive(Debug, PartialEq)]
pub enum ContentView<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Items(&'a [ContentItem]),
}

/// UI options decided at startup, grouped by concern.
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub initial_source: Source,
    pub initial_date: Option<NaiveDate>,
}

/// Dashboard state: selection, theme, fetch cache, weather, status feed.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Local date at startup; upper bound of the date window.
    pub today: NaiveDate,
    /// Lower bound of the date window.
    pub min_date: NaiveDate,
    /// Currently selected source.
    pub selected_source: Source,
    /// Currently selected date, always within `[min_date, today]`.
    pub selected_date: NaiveDate,
    /// Active theme.
    pub theme: Theme,
    /// Whether the sidebar is visible. Layout only, never data.
    pub sidebar_open: bool,
    /// Whether to paint the themed background color.
    pub with_background_color: bool,
    /// Content scroll offset in lines.
    pub scroll: u16,
    /// Per-key fetch results.
    pub cache: FetchCache,
    /// Weather widget state.
    pub weather: WeatherState,
    /// Queue of events waiting to be processed.
    pub pending_events: VecDeque<Event>,
    /// Recent status feed entries, newest last.
    pub status_feed: VecDeque<StatusEvent>,
    /// Animation tick counter.
    pub tick: usize,

    /// Where the theme preference is persisted.
    config_path: PathBuf,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(
        environment: Environment,
        theme: Theme,
        today: NaiveDate,
        config_path: PathBuf,
        ui_config: &UIConfig,
    ) -> Self {
        let min_date = today - chrono::Duration::days(DATE_WINDOW_DAYS);
        let selected_date = ui_config
            .initial_date
            .map(|d| d.clamp(min_date, today))
            .unwrap_or(today);
        Self {
            environment,
            start_time: Instant::now(),
            today,
            min_date,
            selected_source: ui_config.initial_source,
            selected_date,
            theme,
            sidebar_open: true,
            with_background_color: ui_config.with_background_color,
            scroll: 0,
            cache: FetchCache::new(),
            weather: WeatherState::Loading,
            pending_events: VecDeque::new(),
            status_feed: VecDeque::new(),
            tick: 0,
            config_path,
        }
    }

    /// The fetch key for the current selection.
    pub fn current_key(&self) -> FetchKey {
        FetchKey::new(self.selected_source, self.selected_date)
    }

    /// Which branch the content area renders right now.
    pub fn content_view(&self) -> ContentView<'_> {
        match self.cache.get(&self.current_key()) {
            None | Some(FetchState::Loading { .. }) => ContentView::Loading,
            Some(FetchState::Failed(message)) => ContentView::Failed(message),
            Some(FetchState::Ready(response)) if response.items.is_empty() => ContentView::Empty,
            Some(FetchState::Ready(response)) => ContentView::Items(&response.items),
        }
    }

    /// Newest status feed entry that passes the display filter.
    pub fn latest_status(&self) -> Option<&StatusEvent> {
        self.status_feed.iter().rev().find(|e| e.should_display())
    }

    /// Queue an incoming event for the next update pass.
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }

    pub(super) fn push_status(&mut self, event: StatusEvent) {
        if self.status_feed.len() == MAX_STATUS_EVENTS {
            self.status_feed.pop_front();
        }
        self.status_feed.push_back(event);
    }

    pub(super) fn config_path(&self) -> &PathBuf {
        &self.config_path
    }
}
