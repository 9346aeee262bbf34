//! TUI application state types.
//!
//! The root `App` is the single source of truth: the game list, search text,
//! selection, theme flag and both fetch channels live here. Network results
//! arrive as `FetchEvent`s tagged with a generation (list) or game id
//! (detail) so a slow response for an older query can never overwrite newer
//! results.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::api::{ApiError, GameDetail, GameSummary};
use crate::config::Config;

/// Fixed number of card columns in the grid.
pub(crate) const GRID_COLS: usize = 3;

/// Completion of a background fetch, delivered over the app channel.
#[derive(Debug)]
pub(crate) enum FetchEvent {
    List {
        generation: u64,
        result: Result<Vec<GameSummary>, ApiError>,
    },
    Detail {
        game_id: u64,
        result: Result<Box<GameDetail>, ApiError>,
    },
}

/// Fetch to dispatch on the runtime; set by input handling, consumed by the
/// event loop.
#[derive(Debug, Clone)]
pub(crate) enum Action {
    FetchList { generation: u64, query: String },
    FetchDetail { game_id: u64 },
}

/// Detail modal state machine: loading, then loaded or error.
#[derive(Debug)]
pub(crate) enum DetailFetch {
    Loading,
    Loaded(Box<GameDetail>),
    Error(String),
}

#[derive(Debug)]
pub(crate) struct ModalState {
    pub game_id: u64,
    pub fetch: DetailFetch,
    pub scroll: u16,
}

pub(crate) struct AnimationState {
    pub tick: u64,
}

impl AnimationState {
    pub fn new() -> Self {
        Self { tick: 0 }
    }

    pub fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        FRAMES[(self.tick as usize / 6) % FRAMES.len()]
    }
}

pub(crate) struct App {
    pub games: Vec<GameSummary>,
    pub search: String,
    pub cursor: usize,
    pub modal: Option<ModalState>,
    pub list_loading: bool,
    pub dark_mode: bool,

    /// Quiet period after the last keystroke before a search fetch fires.
    pub debounce: Duration,
    /// Armed deadline of the pending debounced search, if any.
    pub search_deadline: Option<Instant>,
    /// Generation of the most recently issued list fetch.
    pub list_generation: u64,

    pub pending_action: Option<Action>,
    pub events_tx: mpsc::Sender<FetchEvent>,
    pub events_rx: mpsc::Receiver<FetchEvent>,

    pub last_tick: Instant,
    pub animation: AnimationState,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            games: Vec::new(),
            search: String::new(),
            cursor: 0,
            modal: None,
            list_loading: false,
            dark_mode: config.ui.dark_mode,
            debounce: Duration::from_millis(config.ui.search_debounce_ms),
            search_deadline: None,
            list_generation: 0,
            pending_action: None,
            events_tx,
            events_rx,
            last_tick: Instant::now(),
            animation: AnimationState::new(),
        }
    }

    /// Queue a list fetch for the current search text, superseding any
    /// earlier in-flight fetch.
    pub fn queue_list_fetch(&mut self) {
        self.list_generation += 1;
        self.list_loading = true;
        self.search_deadline = None;
        self.pending_action = Some(Action::FetchList {
            generation: self.list_generation,
            query: self.search.clone(),
        });
    }

    /// Re-arm the debounce deadline after a search-text edit. The previous
    /// pending deadline is replaced, never the in-flight fetch.
    pub fn arm_search_debounce(&mut self) {
        self.search_deadline = Some(Instant::now() + self.debounce);
    }

    /// Fire the debounced search once its quiet period has elapsed.
    pub fn poll_search_deadline(&mut self, now: Instant) -> bool {
        match self.search_deadline {
            Some(deadline) if now >= deadline => {
                self.queue_list_fetch();
                true
            }
            _ => false,
        }
    }

    /// Open the detail modal for the highlighted card and queue its fetch.
    pub fn open_detail(&mut self) {
        let Some(game) = self.games.get(self.cursor) else {
            return;
        };
        let game_id = game.id;
        self.modal = Some(ModalState {
            game_id,
            fetch: DetailFetch::Loading,
            scroll: 0,
        });
        self.pending_action = Some(Action::FetchDetail { game_id });
    }

    /// Close the modal and clear the selection. Idempotent.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Apply a fetch completion, dropping anything stale.
    pub fn apply_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::List { generation, result } => {
                if generation != self.list_generation {
                    debug!(generation, current = self.list_generation, "dropping stale list response");
                    return;
                }
                self.list_loading = false;
                match result {
                    Ok(games) => {
                        self.games = games;
                    }
                    Err(err) => {
                        // Silently degrade to the empty-state view.
                        warn!(error = %err, "game list fetch failed");
                        self.games.clear();
                    }
                }
                if self.cursor >= self.games.len() {
                    self.cursor = self.games.len().saturating_sub(1);
                }
            }
            FetchEvent::Detail { game_id, result } => {
                let Some(modal) = self.modal.as_mut() else {
                    debug!(game_id, "dropping detail response after modal close");
                    return;
                };
                if modal.game_id != game_id {
                    debug!(game_id, current = modal.game_id, "dropping detail response for old selection");
                    return;
                }
                modal.fetch = match result {
                    Ok(detail) => DetailFetch::Loaded(detail),
                    Err(err) => DetailFetch::Error(err.to_string()),
                };
            }
        }
    }

    /// Move the grid cursor by one step in either axis.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        if self.games.is_empty() {
            return;
        }
        let last = self.games.len() - 1;
        let mut next = self.cursor as isize + dx + dy * GRID_COLS as isize;
        if next < 0 {
            next = 0;
        }
        self.cursor = (next as usize).min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GameSummary;

    fn app() -> App {
        App::new(&Config::default())
    }

    fn summary(id: u64, name: &str) -> GameSummary {
        serde_json::from_str(&format!(r#"{{"id": {id}, "name": "{name}"}}"#)).unwrap()
    }

    #[test]
    fn test_rapid_edits_issue_single_fetch() {
        let mut app = app();
        for c in "witcher".chars() {
            app.search.push(c);
            app.arm_search_debounce();
        }
        // Quiet period not yet elapsed.
        assert!(!app.poll_search_deadline(Instant::now()));
        assert!(app.pending_action.is_none());

        // One fetch fires, with the final text.
        let after_quiet = Instant::now() + app.debounce + Duration::from_millis(1);
        assert!(app.poll_search_deadline(after_quiet));
        match app.pending_action.take() {
            Some(Action::FetchList { generation, query }) => {
                assert_eq!(generation, 1);
                assert_eq!(query, "witcher");
            }
            other => panic!("expected list fetch, got {other:?}"),
        }
        // Deadline consumed; nothing further fires.
        assert!(!app.poll_search_deadline(after_quiet + app.debounce));
    }

    #[test]
    fn test_stale_list_response_dropped() {
        let mut app = app();
        app.queue_list_fetch();
        app.queue_list_fetch(); // supersedes generation 1

        app.apply_event(FetchEvent::List {
            generation: 1,
            result: Ok(vec![summary(1, "Old Query Hit")]),
        });
        assert!(app.games.is_empty());
        assert!(app.list_loading);

        app.apply_event(FetchEvent::List {
            generation: 2,
            result: Ok(vec![summary(2, "New Query Hit")]),
        });
        assert_eq!(app.games.len(), 1);
        assert_eq!(app.games[0].name, "New Query Hit");
        assert!(!app.list_loading);
    }

    #[test]
    fn test_list_failure_degrades_to_empty() {
        let mut app = app();
        app.games = vec![summary(1, "Stale")];
        app.queue_list_fetch();
        app.apply_event(FetchEvent::List {
            generation: 1,
            result: Err(ApiError::Api {
                status: 500,
                message: "boom".into(),
            }),
        });
        assert!(app.games.is_empty());
        assert!(!app.list_loading);
    }

    #[test]
    fn test_detail_error_state_and_close() {
        let mut app = app();
        app.games = vec![summary(42, "Some Game")];
        app.open_detail();
        assert!(matches!(
            app.modal.as_ref().map(|m| &m.fetch),
            Some(DetailFetch::Loading)
        ));
        assert!(matches!(
            app.pending_action,
            Some(Action::FetchDetail { game_id: 42 })
        ));

        app.apply_event(FetchEvent::Detail {
            game_id: 42,
            result: Err(ApiError::Api {
                status: 404,
                message: "Failed to fetch game details (HTTP 404)".into(),
            }),
        });
        match app.modal.as_ref().map(|m| &m.fetch) {
            Some(DetailFetch::Error(msg)) => assert!(msg.contains("404")),
            other => panic!("expected error state, got {other:?}"),
        }

        app.close_modal();
        assert!(app.modal.is_none());
        // Closing again is a no-op.
        app.close_modal();
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_detail_response_for_old_selection_dropped() {
        let mut app = app();
        app.games = vec![summary(1, "First"), summary(2, "Second")];
        app.open_detail();
        app.cursor = 1;
        app.open_detail(); // selection changed before the first response

        app.apply_event(FetchEvent::Detail {
            game_id: 1,
            result: Ok(Box::new(
                serde_json::from_str(r#"{"id": 1, "name": "First"}"#).unwrap(),
            )),
        });
        assert!(matches!(
            app.modal.as_ref().map(|m| &m.fetch),
            Some(DetailFetch::Loading)
        ));
    }

    #[test]
    fn test_theme_toggle_round_trips() {
        let mut app = app();
        let initial = app.dark_mode;
        app.toggle_theme();
        assert_ne!(app.dark_mode, initial);
        app.toggle_theme();
        assert_eq!(app.dark_mode, initial);
    }

    #[test]
    fn test_cursor_clamped_to_grid() {
        let mut app = app();
        app.games = (0..5).map(|i| summary(i, "G")).collect();
        app.move_cursor(0, 1); // down a row
        assert_eq!(app.cursor, 3);
        app.move_cursor(0, 1); // past the end clamps to last
        assert_eq!(app.cursor, 4);
        app.move_cursor(-1, 0);
        assert_eq!(app.cursor, 3);
        app.move_cursor(0, -2);
        assert_eq!(app.cursor, 0);
    }
}
