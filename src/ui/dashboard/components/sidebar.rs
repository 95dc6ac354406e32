//! Dashboard sidebar component
//!
//! Renders the date selector, source navigation, and theme switch

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Render the navigation sidebar.
pub fn render_sidebar(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let theme = &state.theme;
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Select Date",
        Style::default().fg(theme.muted()),
    )));
    lines.push(Line::from(vec![
        Span::styled("◂ ", Style::default().fg(theme.accent())),
        Span::styled(
            state.selected_date.format("%Y-%m-%d").to_string(),
            Style::default()
                .fg(theme.title())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▸", Style::default().fg(theme.accent())),
    ]));
    lines.push(Line::from(Span::styled(
        format!(
            "{} .. {}",
            state.min_date.format("%m-%d"),
            state.today.format("%m-%d")
        ),
        Style::default().fg(theme.muted()),
    )));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "Sources",
        Style::default().fg(theme.muted()),
    )));
    for source in crate::source::Source::ALL {
        let selected = source == state.selected_source;
        let marker = if selected { "▸ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text())
        };
        let mut spans = vec![Span::styled(
            format!("{}{} {}", marker, source.index() + 1, source.display_name()),
            style,
        )];
        // Mark sources already cached for the selected date.
        let key = crate::cache::FetchKey::new(source, state.selected_date);
        if state.cache.is_ready(&key) {
            spans.push(Span::styled(" ●", Style::default().fg(theme.success())));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "Theme",
        Style::default().fg(theme.muted()),
    )));
    let (theme_label, theme_glyph) = if theme.is_dark() {
        ("Dark Mode", "☾")
    } else {
        ("Light Mode", "☀")
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} {}", theme_glyph, theme_label),
            Style::default().fg(theme.text()),
        ),
        Span::styled(" [t]", Style::default().fg(theme.muted())),
    ]));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        format!("Env: {}", state.environment),
        Style::default().fg(theme.muted()),
    )));
    let uptime = state.start_time.elapsed().as_secs();
    lines.push(Line::from(Span::styled(
        format!(
            "v{} · up {}m {}s",
            env!("CARGO_PKG_VERSION"),
            uptime / 60,
            uptime % 60
        ),
        Style::default().fg(theme.muted()),
    )));

    let block = Block::default()
        .title("NOOK")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border()))
        .padding(Padding::uniform(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
