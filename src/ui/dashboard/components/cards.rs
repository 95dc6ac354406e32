//! Content cards component
//!
//! Renders the card list for the current fetch key, with distinct branches
//! for loading skeletons, errors, and the empty state.

use super::super::state::{ContentView, DashboardState};
use super::super::utils::spinner_frame;
use crate::api::types::ContentItem;
use crate::consts::cli_consts::SKELETON_CARDS;
use crate::markdown::render_markdown;
use crate::theme::Theme;

use ratatui::Frame;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Lines for one content card. Pure: no mutation, no network.
pub fn card_lines(item: &ContentItem, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut title_spans = vec![Span::styled(
        item.title.clone(),
        Style::default()
            .fg(theme.title())
            .add_modifier(Modifier::BOLD),
    )];
    // External-link affordance only when the item points somewhere.
    if let Some(url) = &item.url {
        title_spans.push(Span::styled("  ↗ ", Style::default().fg(theme.accent())));
        title_spans.push(Span::styled(
            url.clone(),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::UNDERLINED),
        ));
    }
    lines.push(Line::from(title_spans));
    lines.push(Line::default());

    lines.extend(render_markdown(&item.content, theme));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("#{}", item.source),
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "─".repeat(60),
        Style::default().fg(theme.muted()),
    )));
    lines.push(Line::default());

    lines
}

fn skeleton_lines(theme: &Theme, tick: usize) -> Vec<Line<'static>> {
    let bar = |width: usize| {
        Line::from(Span::styled(
            "▒".repeat(width),
            Style::default().fg(theme.skeleton()),
        ))
    };
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} Loading...", spinner_frame(tick)),
            Style::default().fg(theme.accent()),
        )),
        Line::default(),
    ];
    for _ in 0..SKELETON_CARDS {
        lines.push(bar(32));
        lines.push(Line::default());
        lines.push(bar(56));
        lines.push(bar(48));
        lines.push(Line::default());
        lines.push(Line::default());
    }
    lines
}

fn error_lines(message: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(Span::styled(
            format!("Error loading content: {}", message),
            Style::default().fg(theme.error()),
        )),
        Line::default(),
        Line::from(Span::styled(
            "[r] Try Again",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

fn empty_lines(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(Span::styled(
            "No content available for this source",
            Style::default().fg(theme.muted()),
        )),
    ]
}

/// Render the content area for the current selection.
pub fn render_cards(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let theme = &state.theme;
    let lines = match state.content_view() {
        ContentView::Loading => skeleton_lines(theme, state.tick),
        ContentView::Failed(message) => error_lines(message, theme),
        ContentView::Empty => empty_lines(theme),
        ContentView::Items(items) => items
            .iter()
            .flat_map(|item| card_lines(item, theme))
            .collect(),
    };

    // Keep the last line reachable but never scroll past it.
    let visible = area.height.saturating_sub(4) as usize;
    let max_scroll = lines.len().saturating_sub(visible) as u16;
    let scroll = state.scroll.min(max_scroll);

    let block = Block::default()
        .title("CONTENT")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border()))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(url: Option<&str>) -> ContentItem {
        ContentItem {
            title: "A title".to_string(),
            content: "Some **body** text".to_string(),
            url: url.map(String::from),
            source: "reddit".to_string(),
        }
    }

    fn flattened(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.as_ref()))
            .collect()
    }

    #[test]
    fn test_card_with_url_shows_link_affordance() {
        let lines = card_lines(&item(Some("https://example.com/post")), &Theme::Dark);
        let text = flattened(&lines);
        assert!(text.contains("↗"));
        assert!(text.contains("https://example.com/post"));
    }

    #[test]
    fn test_card_without_url_has_no_link_affordance() {
        let lines = card_lines(&item(None), &Theme::Dark);
        let text = flattened(&lines);
        assert!(!text.contains("↗"));
    }

    #[test]
    fn test_card_carries_source_tag_and_rendered_body() {
        let lines = card_lines(&item(None), &Theme::Dark);
        let text = flattened(&lines);
        assert!(text.contains("#reddit"));
        // Markdown emphasis markers are consumed by rendering.
        assert!(text.contains("body"));
        assert!(!text.contains("**"));
    }
}
