//! Dashboard footer component
//!
//! Renders the latest status line and key bindings

use super::super::state::DashboardState;
use super::super::utils::get_fetcher_color;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer: newest status event above the key help.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let theme = &state.theme;

    let status_line = match state.latest_status() {
        Some(event) => Line::from(vec![
            Span::styled(
                format!("{} ", event.timestamp),
                Style::default().fg(theme.muted()),
            ),
            Span::styled(
                event.msg.clone(),
                Style::default().fg(get_fetcher_color(&event.fetcher)),
            ),
        ]),
        None => Line::from(Span::styled(
            "Starting up...",
            Style::default().fg(theme.muted()),
        )),
    };

    let help_line = Line::from(Span::styled(
        "[1-5/Tab] Source | [←/→] Date | [j/k] Scroll | [t] Theme | [m] Menu | [r] Refresh | [q] Quit",
        Style::default()
            .fg(theme.border())
            .add_modifier(Modifier::BOLD),
    ));

    let footer = Paragraph::new(vec![status_line, help_line])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
