//! Markdown rendering for content cards.
//!
//! Converts the backend's markdown bodies into styled terminal text. Covers
//! what the aggregated summaries actually use: paragraphs, headings, bullet
//! and numbered lists, emphasis, inline code, fenced code blocks, block
//! quotes, tables, and links. Anything unrecognized falls through as plain
//! text rather than being dropped.

use crate::theme::Theme;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Render a markdown body to terminal lines.
pub fn render_markdown(input: &str, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut in_code_block = false;
    let mut table_buffer: Vec<String> = Vec::new();

    for raw_line in input.lines() {
        let trimmed = raw_line.trim_start();

        if trimmed.starts_with("```") {
            flush_table(&mut table_buffer, &mut lines, theme);
            in_code_block = !in_code_block;
            continue;
        }

        if in_code_block {
            flush_table(&mut table_buffer, &mut lines, theme);
            lines.push(Line::from(Span::styled(
                format!("  {}", raw_line),
                Style::default().fg(theme.code()),
            )));
            continue;
        }

        if trimmed.starts_with('|') {
            table_buffer.push(trimmed.to_string());
            continue;
        }
        flush_table(&mut table_buffer, &mut lines, theme);

        if trimmed.is_empty() {
            lines.push(Line::default());
        } else if let Some(heading) = parse_heading(trimmed) {
            lines.push(Line::from(Span::styled(
                heading,
                Style::default()
                    .fg(theme.title())
                    .add_modifier(Modifier::BOLD),
            )));
        } else if is_horizontal_rule(trimmed) {
            lines.push(Line::from(Span::styled(
                "─".repeat(40),
                Style::default().fg(theme.muted()),
            )));
        } else if let Some(rest) = trimmed.strip_prefix("> ") {
            let mut spans = vec![Span::styled("┃ ", Style::default().fg(theme.muted()))];
            spans.extend(parse_inline(rest, theme));
            lines.push(Line::from(spans));
        } else if let Some(rest) = parse_bullet(trimmed) {
            let indent = " ".repeat(raw_line.len() - trimmed.len());
            let mut spans = vec![
                Span::raw(indent),
                Span::styled("• ", Style::default().fg(theme.accent())),
            ];
            spans.extend(parse_inline(rest, theme));
            lines.push(Line::from(spans));
        } else if let Some((number, rest)) = parse_ordered(trimmed) {
            let mut spans = vec![Span::styled(
                format!("{}. ", number),
                Style::default().fg(theme.accent()),
            )];
            spans.extend(parse_inline(rest, theme));
            lines.push(Line::from(spans));
        } else {
            lines.push(Line::from(parse_inline(trimmed, theme)));
        }
    }
    flush_table(&mut table_buffer, &mut lines, theme);

    lines
}

fn parse_heading(line: &str) -> Option<String> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if (1..=6).contains(&hashes) {
        let rest = &line[hashes..];
        if let Some(text) = rest.strip_prefix(' ') {
            return Some(text.to_string());
        }
    }
    None
}

fn is_horizontal_rule(line: &str) -> bool {
    line.len() >= 3
        && (line.chars().all(|c| c == '-')
            || line.chars().all(|c| c == '*')
            || line.chars().all(|c| c == '_'))
}

fn parse_bullet(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("+ "))
}

fn parse_ordered(line: &str) -> Option<(&str, &str)> {
    let digits_end = line.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let rest = &line[digits_end..];
    rest.strip_prefix(". ")
        .or_else(|| rest.strip_prefix(") "))
        .map(|body| (&line[..digits_end], body))
}

/// Rows are buffered until the first non-table line, then laid out with
/// columns padded to the widest cell.
fn flush_table(buffer: &mut Vec<String>, lines: &mut Vec<Line<'static>>, theme: &Theme) {
    if buffer.is_empty() {
        return;
    }
    let rows: Vec<Vec<String>> = buffer.iter().map(|row| split_cells(row)).collect();
    buffer.clear();

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &rows {
        if is_separator_row(row) {
            continue;
        }
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut seen_header = false;
    for row in &rows {
        if is_separator_row(row) {
            let rule = widths
                .iter()
                .map(|w| "─".repeat(*w))
                .collect::<Vec<_>>()
                .join("─┼─");
            lines.push(Line::from(Span::styled(
                rule,
                Style::default().fg(theme.muted()),
            )));
            continue;
        }

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(theme.muted())));
            }
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let padding = width.saturating_sub(cell.chars().count());
            let text = format!("{}{}", cell, " ".repeat(padding));
            let style = if seen_header {
                Style::default().fg(theme.text())
            } else {
                Style::default()
                    .fg(theme.title())
                    .add_modifier(Modifier::BOLD)
            };
            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
        seen_header = true;
    }
}

fn split_cells(row: &str) -> Vec<String> {
    let inner = row.trim().trim_start_matches('|').trim_end_matches('|');
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

fn is_separator_row(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells.iter().all(|cell| {
            !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':')
        })
}

/// Parse a line of text and convert `**bold**`, `*italic*`, `` `code` ``,
/// and `[text](url)` markdown to styled spans.
fn parse_inline(text: &str, theme: &Theme) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut chars = text.chars().peekable();
    let mut current_text = String::new();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    push_plain(&mut spans, &mut current_text);

                    // Find closing **
                    let mut bold_text = String::new();
                    let mut found_close = false;
                    while let Some(c) = chars.next() {
                        if c == '*' && chars.peek() == Some(&'*') {
                            chars.next();
                            found_close = true;
                            break;
                        }
                        bold_text.push(c);
                    }

                    if found_close && !bold_text.is_empty() {
                        spans.push(Span::styled(
                            bold_text,
                            Style::default().add_modifier(Modifier::BOLD),
                        ));
                    } else {
                        // No closing **, treat as literal
                        current_text.push_str("**");
                        current_text.push_str(&bold_text);
                    }
                } else {
                    match take_until(&mut chars, '*') {
                        // Spaces at the edges mean this was arithmetic or a
                        // stray asterisk, not emphasis.
                        Some(italic_text)
                            if !italic_text.is_empty()
                                && !italic_text.starts_with(' ')
                                && !italic_text.ends_with(' ') =>
                        {
                            push_plain(&mut spans, &mut current_text);
                            spans.push(Span::styled(
                                italic_text,
                                Style::default().add_modifier(Modifier::ITALIC),
                            ));
                        }
                        Some(other) => current_text.push_str(&format!("*{}*", other)),
                        None => current_text.push('*'),
                    }
                }
            }
            '`' => match take_until(&mut chars, '`') {
                Some(code_text) => {
                    push_plain(&mut spans, &mut current_text);
                    spans.push(Span::styled(
                        code_text,
                        Style::default().fg(theme.code()),
                    ));
                }
                None => current_text.push('`'),
            },
            '[' => {
                // Links render as their text; the URL itself is noise in a
                // terminal and the card's link affordance covers navigation.
                match parse_link(&mut chars) {
                    Some(link_text) => {
                        push_plain(&mut spans, &mut current_text);
                        spans.push(Span::styled(
                            link_text,
                            Style::default()
                                .fg(theme.accent())
                                .add_modifier(Modifier::UNDERLINED),
                        ));
                    }
                    None => current_text.push('['),
                }
            }
            _ => current_text.push(c),
        }
    }

    push_plain(&mut spans, &mut current_text);
    if spans.is_empty() {
        spans.push(Span::raw(""));
    }
    spans
}

fn push_plain(spans: &mut Vec<Span<'static>>, current_text: &mut String) {
    if !current_text.is_empty() {
        spans.push(Span::raw(std::mem::take(current_text)));
    }
}

/// Consumes up to the next `delimiter` and returns the text before it, or
/// None (consuming nothing useful is impossible here, so the caller treats
/// None as "no closing delimiter on this line").
fn take_until(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    delimiter: char,
) -> Option<String> {
    let remainder: String = chars.clone().collect();
    let end = remainder.find(delimiter)?;
    let char_count = remainder[..end].chars().count();
    let mut taken = String::new();
    for _ in 0..char_count {
        taken.push(chars.next()?);
    }
    chars.next(); // consume the delimiter
    Some(taken)
}

/// Parses the remainder of `[text](url)` after the opening `[`.
fn parse_link(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<String> {
    let remainder: String = chars.clone().collect();
    let close_bracket = remainder.find(']')?;
    if remainder[close_bracket..].chars().nth(1) != Some('(') {
        return None;
    }
    let close_paren = remainder[close_bracket..].find(')')?;

    let text = remainder[..close_bracket].to_string();
    let consumed = remainder[..close_bracket + close_paren + 1].chars().count();
    for _ in 0..consumed {
        chars.next();
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(input: &str) -> Vec<Line<'static>> {
        render_markdown(input, &Theme::Dark)
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_bold_becomes_a_styled_span() {
        let lines = render("before **middle** after");
        assert_eq!(lines.len(), 1);
        let bold = lines[0]
            .spans
            .iter()
            .find(|s| s.style.add_modifier.contains(Modifier::BOLD))
            .expect("bold span");
        assert_eq!(bold.content.as_ref(), "middle");
        assert_eq!(line_text(&lines[0]), "before middle after");
    }

    #[test]
    fn test_unclosed_bold_is_literal() {
        let lines = render("a **dangling tail");
        assert_eq!(line_text(&lines[0]), "a **dangling tail");
    }

    #[test]
    fn test_inline_code_and_italic() {
        let lines = render("use `cargo` *now*");
        let styled: Vec<_> = lines[0]
            .spans
            .iter()
            .filter(|s| s.style != Style::default())
            .collect();
        assert_eq!(styled.len(), 2);
        assert_eq!(styled[0].content.as_ref(), "cargo");
        assert_eq!(styled[1].content.as_ref(), "now");
        assert!(styled[1].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_link_renders_text_without_url() {
        let lines = render("see [the docs](https://example.com) here");
        let text = line_text(&lines[0]);
        assert_eq!(text, "see the docs here");
        assert!(!text.contains("example.com"));
    }

    #[test]
    fn test_malformed_link_is_literal() {
        let lines = render("array[0] indexing");
        assert_eq!(line_text(&lines[0]), "array[0] indexing");
    }

    #[test]
    fn test_heading_is_bold() {
        let lines = render("## Top Stories");
        assert_eq!(line_text(&lines[0]), "Top Stories");
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_bullet_and_ordered_lists() {
        let lines = render("- first\n2. second");
        assert_eq!(line_text(&lines[0]), "• first");
        assert_eq!(line_text(&lines[1]), "2. second");
    }

    #[test]
    fn test_code_fence_suppresses_inline_parsing() {
        let lines = render("```\nlet x = a * b * c;\n```");
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "  let x = a * b * c;");
    }

    #[test]
    fn test_table_columns_are_aligned() {
        let lines = render("| name | stars |\n|---|---|\n| nook | 12 |\n| a | 3 |");
        assert_eq!(lines.len(), 4);
        assert_eq!(line_text(&lines[0]), "name │ stars");
        assert_eq!(line_text(&lines[1]), "─────┼──────");
        assert_eq!(line_text(&lines[2]), "nook │ 12   ");
        assert_eq!(line_text(&lines[3]), "a    │ 3    ");
    }

    #[test]
    fn test_blank_lines_separate_paragraphs() {
        let lines = render("one\n\ntwo");
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[1]), "");
    }
}
