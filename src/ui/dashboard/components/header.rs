//! Dashboard header component
//!
//! Renders the feed title and the fetch progress gauge

use super::super::state::{ContentView, DashboardState};
use super::super::utils::format_display_date;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the header with feed title and fetch state gauge.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title_text = format!(
        "{} Feed — {}",
        state.selected_source.display_name(),
        format_display_date(&state.selected_date)
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(state.theme.title())
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Gauge reflects the current key's fetch state: animated while loading,
    // full when settled.
    let (progress_text, gauge_color, progress_percent) = match state.content_view() {
        ContentView::Loading => {
            // Animated loading gauge - loops every 20 ticks
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                format!("LOADING - {}", state.current_key()),
                state.theme.accent(),
                progress,
            )
        }
        ContentView::Failed(_) => (
            "ERROR - Press [r] to retry".to_string(),
            state.theme.error(),
            100,
        ),
        ContentView::Empty => ("READY - No content".to_string(), state.theme.muted(), 100),
        ContentView::Items(items) => (
            format!("READY - {} item(s)", items.len()),
            state.theme.success(),
            100,
        ),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(state.theme.muted())),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
