//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Fetcher;
use chrono::NaiveDate;
use ratatui::prelude::Color;

/// Get a ratatui color for a fetcher based on its type
pub fn get_fetcher_color(fetcher: &Fetcher) -> Color {
    match fetcher {
        Fetcher::Content => Color::Cyan,
        Fetcher::Weather => Color::Yellow,
    }
}

/// Long date form shown under the feed title, e.g. "June 15, 2024".
pub fn format_display_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Spinner frame for the current animation tick.
pub fn spinner_frame(tick: usize) -> &'static str {
    const FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
    FRAMES[tick % FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(format_display_date(&date), "June 5, 2024");
    }

    #[test]
    fn test_spinner_wraps_around() {
        assert_eq!(spinner_frame(0), spinner_frame(8));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }
}
