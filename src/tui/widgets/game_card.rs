//! Grid card for one game summary.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::api::GameSummary;
use crate::games::{format_rating, platform_icons, release_year};
use crate::tui::theme::Theme;

/// Card height in rows, borders included.
pub(crate) const CARD_HEIGHT: u16 = 6;

pub(crate) fn draw_game_card(
    area: Rect,
    f: &mut ratatui::Frame,
    theme: &Theme,
    game: &GameSummary,
    selected: bool,
) {
    let border_color = if selected { theme.accent } else { theme.border };
    let title_style = if selected {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(Span::styled(game.name.as_str(), title_style))];

    // Genre tags (first two, like the grid card always showed).
    let genres = game
        .genres
        .iter()
        .take(2)
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(Line::from(Span::styled(
        genres,
        Style::default().fg(theme.text_dim),
    )));

    // Rating, release year and metacritic tier.
    let mut stats = vec![Span::styled(
        format!("⭐ {}", format_rating(game.rating)),
        Style::default().fg(theme.caution),
    )];
    if let Some(year) = release_year(game.released.as_deref()) {
        stats.push(Span::raw("  "));
        stats.push(Span::styled(
            format!("📅 {year}"),
            Style::default().fg(theme.text_dim),
        ));
    }
    if let Some(score) = game.metacritic {
        stats.push(Span::raw("  "));
        stats.push(Span::styled(
            format!("MC {score}"),
            Style::default()
                .fg(theme.metacritic_color(score))
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(stats));

    // Platform icons plus a badge when a preview clip exists.
    let mut badges: Vec<Span> = platform_icons(&game.platforms)
        .into_iter()
        .map(|icon| Span::raw(format!("{} ", icon.glyph)))
        .collect();
    if game.clip_url().is_some() {
        badges.push(Span::styled("▶ clip", Style::default().fg(theme.optimal)));
    }
    lines.push(Line::from(badges));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}
