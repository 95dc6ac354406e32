//! Light/dark theming.
//!
//! The active theme is chosen once at startup (persisted value, then the
//! terminal's `COLORFGBG` hint, then dark) and flipped only by the theme
//! toggle, which also persists the new value.

use ratatui::prelude::Color;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The opposite theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Best guess at the terminal's own scheme. Several emulators export
    /// `COLORFGBG` as `<fg>;<bg>` with ANSI palette indices; a low background
    /// index means a dark background.
    pub fn from_terminal_env() -> Option<Theme> {
        let value = env::var("COLORFGBG").ok()?;
        Self::from_colorfgbg(&value)
    }

    fn from_colorfgbg(value: &str) -> Option<Theme> {
        let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        if bg <= 6 || bg == 8 {
            Some(Theme::Dark)
        } else {
            Some(Theme::Light)
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    // Palette accessors. Every widget styles itself through these so the
    // toggle restyles the whole dashboard.

    pub fn background(&self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(16, 20, 24),
            Theme::Light => Color::Rgb(243, 244, 246),
        }
    }

    pub fn text(&self) -> Color {
        match self {
            Theme::Dark => Color::Gray,
            Theme::Light => Color::Black,
        }
    }

    pub fn title(&self) -> Color {
        match self {
            Theme::Dark => Color::White,
            Theme::Light => Color::Black,
        }
    }

    pub fn accent(&self) -> Color {
        match self {
            Theme::Dark => Color::LightBlue,
            Theme::Light => Color::Blue,
        }
    }

    pub fn muted(&self) -> Color {
        Color::DarkGray
    }

    pub fn border(&self) -> Color {
        match self {
            Theme::Dark => Color::Cyan,
            Theme::Light => Color::Blue,
        }
    }

    pub fn error(&self) -> Color {
        match self {
            Theme::Dark => Color::LightRed,
            Theme::Light => Color::Red,
        }
    }

    pub fn success(&self) -> Color {
        match self {
            Theme::Dark => Color::LightGreen,
            Theme::Light => Color::Green,
        }
    }

    pub fn code(&self) -> Color {
        match self {
            Theme::Dark => Color::LightYellow,
            Theme::Light => Color::Rgb(154, 52, 18),
        }
    }

    pub fn skeleton(&self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(55, 65, 81),
            Theme::Light => Color::Rgb(209, 213, 219),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_theme_round_trips_through_strings() {
        assert_eq!(Theme::from_str("dark"), Ok(Theme::Dark));
        assert_eq!(Theme::from_str("light"), Ok(Theme::Light));
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
        assert!(Theme::from_str("solarized").is_err());
    }

    #[test]
    fn test_toggle_is_an_involution() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_colorfgbg_heuristic() {
        assert_eq!(Theme::from_colorfgbg("15;0"), Some(Theme::Dark));
        assert_eq!(Theme::from_colorfgbg("0;15"), Some(Theme::Light));
        assert_eq!(Theme::from_colorfgbg("12;8"), Some(Theme::Dark));
        assert_eq!(Theme::from_colorfgbg("garbage"), None);
    }
}
