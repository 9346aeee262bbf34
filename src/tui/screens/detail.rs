//! Detail modal: loading / error / loaded views over the browse screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use crate::api::GameDetail;
use crate::games::{clean_requirements, truncate_description};
use crate::tui::state::{App, DetailFetch, ModalState};
use crate::tui::theme::Theme;

pub(crate) fn draw_detail_modal(area: Rect, f: &mut ratatui::Frame, app: &App, theme: &Theme) {
    let Some(modal) = app.modal.as_ref() else {
        return;
    };

    let popup_area = centered_rect(80, 80, area);
    f.render_widget(Clear, popup_area);

    match &modal.fetch {
        DetailFetch::Loading => draw_loading(popup_area, f, app, theme),
        DetailFetch::Error(message) => draw_error(popup_area, f, theme, message),
        DetailFetch::Loaded(detail) => draw_loaded(popup_area, f, theme, modal, detail),
    }
}

fn draw_loading(area: Rect, f: &mut ratatui::Frame, app: &App, theme: &Theme) {
    let spinner = app.animation.spinner_char();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {spinner}  Loading game details..."),
            Style::default().fg(theme.accent),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  [Esc to close]",
            Style::default().fg(theme.muted),
        )),
    ];
    f.render_widget(
        Paragraph::new(Text::from(lines)).block(modal_block(theme, theme.border)),
        area,
    );
}

fn draw_error(area: Rect, f: &mut ratatui::Frame, theme: &Theme, message: &str) {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ✕  ", Style::default().fg(theme.critical)),
            Span::styled(
                "Something went wrong",
                Style::default()
                    .fg(theme.critical)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    for line in message.lines() {
        lines.push(Line::from(Span::styled(
            format!("  {line}"),
            Style::default().fg(theme.text),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [Enter to close]",
        Style::default().fg(theme.muted),
    )));

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(modal_block(theme, theme.critical))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_loaded(
    area: Rect,
    f: &mut ratatui::Frame,
    theme: &Theme,
    modal: &ModalState,
    detail: &GameDetail,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();

    let mut title_spans = vec![Span::styled(
        detail.name.as_str(),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(released) = detail.released.as_deref() {
        title_spans.push(Span::styled(
            format!("  📅 {released}"),
            Style::default().fg(theme.text_dim),
        ));
    }
    if let Some(score) = detail.metacritic {
        title_spans.push(Span::styled(
            format!("  Metacritic: {score}"),
            Style::default()
                .fg(theme.metacritic_color(score))
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(title_spans));
    lines.push(Line::from(""));

    section(&mut lines, theme, "📝 About");
    match detail.description_raw.as_deref() {
        Some(description) if !description.trim().is_empty() => {
            lines.push(Line::from(Span::styled(
                truncate_description(description),
                Style::default().fg(theme.text),
            )));
        }
        _ => lines.push(Line::from(Span::styled(
            "No description available.",
            Style::default().fg(theme.muted),
        ))),
    }
    lines.push(Line::from(""));

    section(&mut lines, theme, "🎮 Platforms");
    lines.push(tag_line(
        detail.platforms.iter().map(|p| p.platform.name.as_str()),
        theme,
    ));
    lines.push(Line::from(""));

    section(&mut lines, theme, "🏷️ Genres");
    lines.push(tag_line(detail.genres.iter().map(|g| g.name.as_str()), theme));
    lines.push(Line::from(""));

    if !detail.developers.is_empty() {
        section(&mut lines, theme, "🏢 Developers");
        lines.push(tag_line(
            detail.developers.iter().map(|d| d.name.as_str()),
            theme,
        ));
        lines.push(Line::from(""));
    }

    if let Some(requirements) = detail.pc_requirements() {
        section(&mut lines, theme, "💻 PC System Requirements");
        let mut any = false;
        for (label, block) in [
            ("Minimum", requirements.minimum.as_deref()),
            ("Recommended", requirements.recommended.as_deref()),
        ] {
            let Some(raw) = block else { continue };
            any = true;
            lines.push(Line::from(Span::styled(
                label,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )));
            for req_line in clean_requirements(raw) {
                lines.push(Line::from(Span::styled(
                    format!("  {req_line}"),
                    Style::default().fg(theme.text_dim),
                )));
            }
            lines.push(Line::from(""));
        }
        if !any {
            lines.push(Line::from(Span::styled(
                "No requirement details listed.",
                Style::default().fg(theme.muted),
            )));
            lines.push(Line::from(""));
        }
    }

    if let Some(website) = detail.website.as_deref() {
        if !website.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("🌐 ", Style::default().fg(theme.text_dim)),
                Span::styled(website, Style::default().fg(theme.accent)),
            ]));
        }
    }

    let para = Paragraph::new(Text::from(lines))
        .block(modal_block(theme, theme.accent))
        .wrap(Wrap { trim: false })
        .scroll((modal.scroll, 0));
    f.render_widget(para, layout[0]);

    let hint = Paragraph::new(Line::from(Span::styled(
        " ↑/↓ Scroll  ·  Esc Close",
        Style::default().fg(theme.muted),
    )));
    f.render_widget(hint, layout[1]);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, title: &'a str) {
    lines.push(Line::from(Span::styled(
        title,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )));
}

fn tag_line<'a>(names: impl Iterator<Item = &'a str>, theme: &Theme) -> Line<'static> {
    let joined = names.collect::<Vec<_>>().join("  ·  ");
    if joined.is_empty() {
        Line::from(Span::styled(
            "—".to_string(),
            Style::default().fg(theme.muted),
        ))
    } else {
        Line::from(Span::styled(joined, Style::default().fg(theme.text)))
    }
}

fn modal_block(theme: &Theme, border: ratatui::style::Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().fg(theme.text))
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
