//! Dashboard main renderer

use super::components::{cards, footer, header, sidebar, weather};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::Style;
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(state.theme.background())),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    if state.sidebar_open {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Fill(1)])
            .split(main_chunks[1]);

        let sidebar_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(4)])
            .split(content_chunks[0]);

        sidebar::render_sidebar(f, sidebar_chunks[0], state);
        weather::render_weather(f, sidebar_chunks[1], state);
        cards::render_cards(f, content_chunks[1], state);
    } else {
        cards::render_cards(f, main_chunks[1], state);
    }

    footer::render_footer(f, main_chunks[2], state);
}
