//! Weather widget component
//!
//! Icon and temperature for the current weather snapshot. The widget has its
//! own loading state and disappears entirely when the fetch failed.

use super::super::state::{DashboardState, WeatherState};

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Map an icon label to a glyph and color. Unrecognized labels get the
/// default (sunny) glyph.
pub fn weather_glyph(icon: &str) -> (&'static str, Color) {
    match icon {
        "sunny" => ("☀", Color::Yellow),
        "cloudy" => ("☁", Color::Gray),
        "rainy" => ("🌧", Color::Blue),
        _ => ("☀", Color::Yellow),
    }
}

/// Render the weather widget.
pub fn render_weather(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let theme = &state.theme;

    let lines = match &state.weather {
        WeatherState::Loading => vec![
            Line::from(Span::styled("▒▒▒▒▒▒", Style::default().fg(theme.skeleton()))),
            Line::from(Span::styled("▒▒▒▒", Style::default().fg(theme.skeleton()))),
        ],
        WeatherState::Ready(weather) => {
            let (glyph, color) = weather_glyph(&weather.icon);
            vec![
                Line::from(vec![
                    Span::styled(format!("{} ", glyph), Style::default().fg(color)),
                    Span::styled(
                        format!("{}°C", weather.temperature),
                        Style::default()
                            .fg(theme.title())
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    "Current Weather",
                    Style::default().fg(theme.muted()),
                )),
            ]
        }
        // No data, no widget; the block stays empty.
        WeatherState::Missing => return,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border()))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icons_map_to_distinct_glyphs() {
        assert_eq!(weather_glyph("sunny").0, "☀");
        assert_eq!(weather_glyph("cloudy").0, "☁");
        assert_eq!(weather_glyph("rainy").0, "🌧");
    }

    #[test]
    fn test_unknown_icon_falls_back_to_default() {
        assert_eq!(weather_glyph("hail"), weather_glyph("sunny"));
        assert_eq!(weather_glyph(""), weather_glyph("sunny"));
    }
}
