//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events and key
//! input. Nothing here performs network access; fetches are spawned by the
//! UI loop when it sees a selection without a cache entry.

use super::state::{DashboardState, WeatherState};
use crate::cache::FetchState;
use crate::config::Config;
use crate::events::Event;
use crate::source::Source;

impl DashboardState {
    /// Update the dashboard state with new tick and queued events.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: Event) {
        match event {
            Event::Content { key, outcome } => {
                // Apply the result only if its originating key is still the
                // one on screen. A stale result is discarded, and its loading
                // entry evicted so a later revisit refetches.
                if key != self.current_key() {
                    log::debug!("discarding stale result for {}", key);
                    self.cache.evict(&key);
                    return;
                }
                let state = match outcome {
                    Ok(response) => FetchState::Ready(response),
                    Err(e) => FetchState::Failed(e.to_string()),
                };
                self.cache.complete(key, state);
            }
            Event::Weather { outcome } => {
                self.weather = match outcome {
                    Ok(weather) => WeatherState::Ready(weather),
                    Err(_) => WeatherState::Missing,
                };
            }
            Event::Status(status) => self.push_status(status),
        }
    }

    // Selection. Every selection change resets the scroll position; the
    // cache decides whether the new key needs a fetch.

    pub fn select_source(&mut self, source: Source) {
        if self.selected_source != source {
            self.selected_source = source;
            self.scroll = 0;
        }
    }

    pub fn select_next_source(&mut self) {
        self.select_source(self.selected_source.next());
    }

    pub fn select_prev_source(&mut self) {
        self.select_source(self.selected_source.prev());
    }

    /// Step one day back, stopping at the window's lower bound.
    pub fn select_prev_date(&mut self) {
        let candidate = self.selected_date - chrono::Duration::days(1);
        if candidate >= self.min_date {
            self.selected_date = candidate;
            self.scroll = 0;
        }
    }

    /// Step one day forward, stopping at today.
    pub fn select_next_date(&mut self) {
        let candidate = self.selected_date + chrono::Duration::days(1);
        if candidate <= self.today {
            self.selected_date = candidate;
            self.scroll = 0;
        }
    }

    /// Manual refresh: evict the current key so the UI loop refetches it.
    /// This is also the retry affordance for a failed key.
    pub fn refresh(&mut self) {
        let key = self.current_key();
        self.cache.evict(&key);
        self.scroll = 0;
    }

    /// Flip the theme and persist the choice.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = Config::new(self.theme).save(self.config_path()) {
            log::warn!("failed to persist theme: {}", e);
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::api::types::{ContentItem, ContentResponse};
    use crate::environment::Environment;
    use crate::theme::Theme;
    use crate::ui::dashboard::state::{ContentView, UIConfig};
    use chrono::NaiveDate;

    fn state_in(dir: &tempfile::TempDir) -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Theme::Dark,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            dir.path().join("config.json"),
            &UIConfig {
                with_background_color: true,
                initial_source: Source::HackerNews,
                initial_date: None,
            },
        )
    }

    fn items(n: usize) -> ContentResponse {
        ContentResponse {
            items: (0..n)
                .map(|i| ContentItem {
                    title: format!("item {i}"),
                    content: "body".to_string(),
                    url: None,
                    source: "hackernews".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_result_for_current_key_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let key = state.current_key();
        state.cache.begin(key);

        state.add_event(Event::Content {
            key,
            outcome: Ok(items(2)),
        });
        state.update();

        assert!(matches!(state.content_view(), ContentView::Items(i) if i.len() == 2));
    }

    #[test]
    fn test_stale_result_is_discarded_and_evicted() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let stale_key = state.current_key();
        state.cache.begin(stale_key);

        // User switches away while the fetch is in flight.
        state.select_source(Source::Reddit);
        state.add_event(Event::Content {
            key: stale_key,
            outcome: Ok(items(3)),
        });
        state.update();

        // The new key is untouched and the stale key refetches on revisit.
        assert_eq!(state.content_view(), ContentView::Loading);
        assert!(state.cache.get(&stale_key).is_none());
    }

    #[test]
    fn test_empty_items_is_the_empty_branch_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let key = state.current_key();
        state.cache.begin(key);

        state.add_event(Event::Content {
            key,
            outcome: Ok(items(0)),
        });
        state.update();

        assert_eq!(state.content_view(), ContentView::Empty);
    }

    #[test]
    fn test_error_message_is_shown_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let key = state.current_key();
        state.cache.begin(key);

        state.add_event(Event::Content {
            key,
            outcome: Err(ApiError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
            }),
        });
        state.update();

        match state.content_view() {
            ContentView::Failed(message) => {
                assert!(message.contains("500"));
                assert!(message.contains("Internal Server Error"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_date_stepping_clamps_to_the_window() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);

        // Today is the upper bound.
        state.select_next_date();
        assert_eq!(state.selected_date, state.today);

        for _ in 0..100 {
            state.select_prev_date();
        }
        assert_eq!(state.selected_date, state.min_date);
    }

    #[test]
    fn test_out_of_window_start_date_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let state = DashboardState::new(
            Environment::Local,
            Theme::Dark,
            today,
            dir.path().join("config.json"),
            &UIConfig {
                with_background_color: true,
                initial_source: Source::Reddit,
                initial_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            },
        );
        assert_eq!(state.selected_date, state.min_date);
    }

    #[test]
    fn test_refresh_evicts_the_current_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let key = state.current_key();
        state.cache.begin(key);
        state.cache.complete(key, FetchState::Failed("HTTP 500".to_string()));

        state.refresh();
        assert_eq!(state.content_view(), ContentView::Loading);
        assert!(state.cache.begin(key), "refresh re-enters loading");
    }

    #[test]
    fn test_toggle_theme_persists_the_choice() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let path = dir.path().join("config.json");

        state.toggle_theme();
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(Config::initial_theme(&path), Theme::Light);

        state.toggle_theme();
        assert_eq!(Config::initial_theme(&path), Theme::Dark);
    }

    #[test]
    fn test_switching_selection_resets_scroll() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        state.scroll_down(20);
        state.select_prev_date();
        assert_eq!(state.scroll, 0);

        state.scroll_down(5);
        state.select_source(Source::Paper);
        assert_eq!(state.scroll, 0);

        // Re-selecting the same source is a no-op and keeps the scroll.
        state.scroll_down(5);
        state.select_source(Source::Paper);
        assert_eq!(state.scroll, 5);
    }
}
