//! Browse screen: the card grid, the loading spinner and the empty state.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::tui::state::{App, GRID_COLS};
use crate::tui::theme::Theme;
use crate::tui::widgets::game_card::{draw_game_card, CARD_HEIGHT};

pub(crate) fn draw_browse(area: Rect, f: &mut ratatui::Frame, app: &App, theme: &Theme) {
    if app.list_loading {
        draw_loading(area, f, app, theme);
        return;
    }

    if app.games.is_empty() {
        draw_empty_state(area, f, theme);
        return;
    }

    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let total_rows = app.games.len().div_ceil(GRID_COLS);
    let cursor_row = app.cursor / GRID_COLS;

    // Scroll the grid just enough to keep the highlighted row on screen.
    let first_row = if cursor_row + 1 > visible_rows {
        (cursor_row + 1 - visible_rows).min(total_rows.saturating_sub(visible_rows))
    } else {
        0
    };

    let row_constraints: Vec<Constraint> = (0..visible_rows)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (slot, row_area) in rows.iter().enumerate() {
        let row = first_row + slot;
        if row >= total_rows {
            break;
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, GRID_COLS as u32);
                GRID_COLS
            ])
            .split(*row_area);

        for col in 0..GRID_COLS {
            let idx = row * GRID_COLS + col;
            let Some(game) = app.games.get(idx) else {
                break;
            };
            draw_game_card(cols[col], f, theme, game, idx == app.cursor);
        }
    }
}

fn draw_loading(area: Rect, f: &mut ratatui::Frame, app: &App, theme: &Theme) {
    let spinner = app.animation.spinner_char();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{spinner}  Loading games..."),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(
        Paragraph::new(Text::from(lines)).centered(),
        area,
    );
}

fn draw_empty_state(area: Rect, f: &mut ratatui::Frame, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("🎮", Style::default().fg(theme.text_dim))),
        Line::from(Span::styled(
            "No games found",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Try a different search term",
            Style::default().fg(theme.muted),
        )),
    ];
    f.render_widget(
        Paragraph::new(Text::from(lines)).centered(),
        area,
    );
}
