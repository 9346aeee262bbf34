//! Fullscreen terminal UI (TUI).
//!
//! Single-threaded draw/input loop. Network fetches are dispatched onto the
//! tokio runtime and report back over an mpsc channel polled every frame, so
//! the UI thread never blocks on I/O.

pub(crate) mod input;
pub(crate) mod screens;
pub(crate) mod state;
pub(crate) mod theme;
pub(crate) mod widgets;

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use crate::api::ApiClient;
use crate::config::Config;
use state::{Action, App, FetchEvent};
use theme::Theme;

const FRAME_TIME: Duration = Duration::from_millis(16);

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

pub(crate) fn run_tui(rt: &tokio::runtime::Runtime, config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;

    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(config);
    // Initial fetch, once, with an empty query.
    app.queue_list_fetch();

    loop {
        terminal.draw(|f| draw(f.area(), f, &app))?;

        // Apply any fetch completions that arrived since the last frame.
        while let Ok(fetch_event) = app.events_rx.try_recv() {
            app.apply_event(fetch_event);
        }

        // Fire the debounced search once the quiet period has elapsed.
        app.poll_search_deadline(Instant::now());

        if let Some(action) = app.pending_action.take() {
            match action {
                Action::FetchList { generation, query } => {
                    spawn_list_fetch(rt, &client, app.events_tx.clone(), generation, query)
                }
                Action::FetchDetail { game_id } => {
                    spawn_detail_fetch(rt, &client, app.events_tx.clone(), game_id)
                }
            }
            continue;
        }

        let timeout = FRAME_TIME.saturating_sub(app.last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if input::handle_key(&mut app, key) {
                    break;
                }
            }
        }

        if app.last_tick.elapsed() >= FRAME_TIME {
            app.last_tick = Instant::now();
            app.animation.advance();
        }
    }

    Ok(())
}

fn spawn_list_fetch(
    rt: &tokio::runtime::Runtime,
    client: &ApiClient,
    tx: mpsc::Sender<FetchEvent>,
    generation: u64,
    query: String,
) {
    let client = client.clone();
    rt.spawn(async move {
        let result = client.list_games(&query).await;
        // The receiver may be gone during shutdown.
        let _ = tx.send(FetchEvent::List { generation, result });
    });
}

fn spawn_detail_fetch(
    rt: &tokio::runtime::Runtime,
    client: &ApiClient,
    tx: mpsc::Sender<FetchEvent>,
    game_id: u64,
) {
    let client = client.clone();
    rt.spawn(async move {
        let result = client.game_details(game_id).await.map(Box::new);
        let _ = tx.send(FetchEvent::Detail { game_id, result });
    });
}

fn draw(area: Rect, f: &mut ratatui::Frame, app: &App) {
    let theme = Theme::for_mode(app.dark_mode);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Min(0),    // content
            Constraint::Length(1), // footer
        ])
        .split(area);

    widgets::header::draw_header(layout[0], f, &theme, &app.search, app.dark_mode);

    screens::browse::draw_browse(layout[1], f, app, &theme);

    let hints: &[(&str, &str)] = if app.modal.is_some() {
        &[("↑/↓", "Scroll"), ("Esc", "Close")]
    } else {
        &[
            ("Type", "Search"),
            ("↑/↓/◄/►", "Navigate"),
            ("Enter", "Details"),
            ("Tab", "Theme"),
            ("Esc", "Quit"),
        ]
    };
    widgets::footer::draw_footer(layout[2], f, &theme, hints);

    // Modal renders over the browse content, backdrop style.
    screens::detail::draw_detail_modal(layout[1], f, app, &theme);
}
