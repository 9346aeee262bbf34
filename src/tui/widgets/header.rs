//! Top header bar: app title, search box and theme indicator.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::theme::Theme;

pub(crate) fn draw_header(
    area: Rect,
    f: &mut ratatui::Frame,
    theme: &Theme,
    search: &str,
    dark_mode: bool,
) {
    let mode_icon = if dark_mode { "🌙" } else { "☀" };

    let mut spans = vec![
        Span::styled(
            "GAME SHELF",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  🔍 ", Style::default().fg(theme.text_dim)),
    ];

    if search.is_empty() {
        spans.push(Span::styled(
            "type to search...",
            Style::default().fg(theme.muted),
        ));
    } else {
        spans.push(Span::styled(search, Style::default().fg(theme.text)));
    }
    spans.push(Span::styled("▏", Style::default().fg(theme.accent)));

    // Theme indicator, right-aligned when there is room.
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let pad = (area.width as usize).saturating_sub(used + 2);
    if pad > 0 {
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(mode_icon, Style::default().fg(theme.text_dim)));
    }

    let header_line = Line::from(spans);
    let rule = Line::from(Span::styled(
        "─".repeat(area.width as usize),
        Style::default().fg(theme.border),
    ));

    f.render_widget(Paragraph::new(vec![header_line, rule]), area);
}
