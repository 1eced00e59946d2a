use std::time::{Duration, Instant};

use ratatui::widgets::{ListState, TableState};

use crate::action::Action;
use crate::config::{FeedLayout, DEFAULT_POLL_INTERVAL_SECS};
use crate::domain::FeedEvent;
use crate::format::{self, DisplayRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

#[derive(Debug, Clone)]
pub enum LoadState<T> {
    NotLoaded,
    Loading,
    Loaded(T),
}

impl<T> LoadState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Error(String),
}

#[derive(Debug, Clone)]
pub enum Effect {
    LoadEvents,
    Quit,
}

pub struct App {
    // View state
    pub layout: FeedLayout,
    pub overlay: Overlay,

    // Connection
    pub endpoint: String,
    pub connection_status: ConnectionStatus,

    // Feed data
    pub events: LoadState<Vec<FeedEvent>>,
    pub rows: Vec<DisplayRow>,
    pub table_state: TableState,
    pub list_state: ListState,

    // Polling
    pub polling_enabled: bool,
    pub polling_interval: Duration,
    pub last_refresh: Option<Instant>,

    // App
    pub should_quit: bool,
    pub last_error: Option<(String, Instant)>,
}

impl App {
    pub fn new(endpoint: String, layout: FeedLayout) -> Self {
        Self {
            layout,
            overlay: Overlay::None,

            endpoint,
            connection_status: ConnectionStatus::Connecting,

            events: LoadState::NotLoaded,
            rows: vec![],
            table_state: TableState::default(),
            list_state: ListState::default(),

            polling_enabled: true,
            polling_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            last_refresh: None,

            should_quit: false,
            last_error: None,
        }
    }

    pub fn update(&mut self, action: Action) -> Vec<Effect> {
        // Clear stale error toasts
        if let Some((_, at)) = &self.last_error {
            if at.elapsed() > Duration::from_secs(5) {
                self.last_error = None;
            }
        }

        match action {
            // Navigation
            Action::NavigateUp => {
                if let Some(idx) = self.table_state.selected() {
                    self.select(Some(idx.saturating_sub(1)));
                }
                vec![]
            }
            Action::NavigateDown => {
                if !self.rows.is_empty() {
                    let next = match self.table_state.selected() {
                        Some(idx) => (idx + 1).min(self.rows.len() - 1),
                        None => 0,
                    };
                    self.select(Some(next));
                }
                vec![]
            }
            Action::NavigateTop => {
                if !self.rows.is_empty() {
                    self.select(Some(0));
                }
                vec![]
            }
            Action::NavigateBottom => {
                if !self.rows.is_empty() {
                    self.select(Some(self.rows.len() - 1));
                }
                vec![]
            }

            // UI
            Action::ToggleHelp => {
                self.overlay = match self.overlay {
                    Overlay::Help => Overlay::None,
                    Overlay::None => Overlay::Help,
                };
                vec![]
            }
            Action::SwitchLayout => {
                self.layout = self.layout.toggled();
                vec![]
            }

            // Data responses
            Action::EventsLoaded(events) => {
                // Full redraw semantics: the new list fully supersedes the
                // previous one, in server order.
                self.rows = format::display_rows(&events);
                self.events = LoadState::Loaded(events);
                self.connection_status = ConnectionStatus::Connected;
                self.clamp_selection();
                vec![]
            }

            // App control
            Action::Refresh => self.refresh(),
            Action::Quit => {
                self.should_quit = true;
                vec![Effect::Quit]
            }
            Action::Tick => {
                if self.polling_enabled
                    && poll_due(self.last_refresh, Instant::now(), self.polling_interval)
                {
                    return self.refresh();
                }
                vec![]
            }
            Action::Error(msg) => {
                // The rendered feed is left untouched; only the status line
                // and toast reflect the failure.
                self.last_error = Some((msg.clone(), Instant::now()));
                self.connection_status = ConnectionStatus::Error(msg);
                vec![]
            }
            Action::ClearError => {
                self.last_error = None;
                vec![]
            }
            Action::TogglePolling => {
                self.polling_enabled = !self.polling_enabled;
                vec![]
            }
        }
    }

    /// Kick off a fetch and reset the poll cadence. The cadence is anchored
    /// to request time, not response time, so a failed fetch does not turn
    /// every tick into a retry.
    fn refresh(&mut self) -> Vec<Effect> {
        if matches!(self.events, LoadState::NotLoaded) {
            self.events = LoadState::Loading;
        }
        self.last_refresh = Some(Instant::now());
        vec![Effect::LoadEvents]
    }

    fn select(&mut self, idx: Option<usize>) {
        self.table_state.select(idx);
        self.list_state.select(idx);
    }

    fn clamp_selection(&mut self) {
        if self.rows.is_empty() {
            self.select(None);
        } else {
            match self.table_state.selected() {
                Some(idx) if idx >= self.rows.len() => self.select(Some(self.rows.len() - 1)),
                Some(_) => {}
                None => self.select(Some(0)),
            }
        }
    }
}

/// Whether the next poll is due. Pure so tests can pass explicit instants.
pub fn poll_due(last_refresh: Option<Instant>, now: Instant, interval: Duration) -> bool {
    match last_refresh {
        Some(at) => now.duration_since(at) >= interval,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{parse_timestamp, ActionKind, FeedEvent};

    fn app() -> App {
        App::new("http://localhost:5000".to_string(), FeedLayout::List)
    }

    fn push_event(author: &str) -> FeedEvent {
        FeedEvent {
            author: author.to_string(),
            action: ActionKind::Push,
            from_branch: None,
            to_branch: "main".to_string(),
            timestamp: parse_timestamp("2024-01-02T03:04:05Z").unwrap(),
        }
    }

    #[test]
    fn events_loaded_replaces_rows_and_selects_first() {
        let mut app = app();
        app.update(Action::EventsLoaded(vec![
            push_event("alice"),
            push_event("bob"),
        ]));

        assert_eq!(app.rows.len(), 2);
        assert_eq!(app.table_state.selected(), Some(0));
        assert_eq!(app.connection_status, ConnectionStatus::Connected);

        // The next list fully supersedes the old one.
        app.update(Action::EventsLoaded(vec![push_event("carol")]));
        assert_eq!(app.rows.len(), 1);
        assert_eq!(app.rows[0].summary, "carol pushed to main");
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn empty_feed_clears_rows_and_selection() {
        let mut app = app();
        app.update(Action::EventsLoaded(vec![push_event("alice")]));
        app.update(Action::EventsLoaded(vec![]));

        assert!(app.rows.is_empty());
        assert_eq!(app.table_state.selected(), None);
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn error_leaves_rendered_feed_untouched() {
        let mut app = app();
        app.update(Action::EventsLoaded(vec![push_event("alice")]));
        let rows_before = app.rows.clone();

        app.update(Action::Error("transport error: boom".to_string()));

        assert_eq!(app.rows, rows_before);
        assert!(app.events.data().is_some());
        assert!(matches!(app.connection_status, ConnectionStatus::Error(_)));
        assert!(app.last_error.is_some());
    }

    #[test]
    fn tick_polls_only_when_due() {
        let mut app = app();

        // Never refreshed: first tick fires immediately.
        let effects = app.update(Action::Tick);
        assert!(matches!(effects.as_slice(), [Effect::LoadEvents]));

        // Just refreshed: next tick is a no-op.
        let effects = app.update(Action::Tick);
        assert!(effects.is_empty());
    }

    #[test]
    fn tick_respects_polling_toggle() {
        let mut app = app();
        app.update(Action::TogglePolling);
        assert!(app.update(Action::Tick).is_empty());

        app.update(Action::TogglePolling);
        assert!(matches!(
            app.update(Action::Tick).as_slice(),
            [Effect::LoadEvents]
        ));
    }

    #[test]
    fn poll_due_boundaries() {
        let interval = Duration::from_secs(15);
        let start = Instant::now();
        assert!(poll_due(None, start, interval));
        assert!(!poll_due(Some(start), start + Duration::from_secs(14), interval));
        assert!(poll_due(Some(start), start + Duration::from_secs(15), interval));
    }

    #[test]
    fn navigation_clamps_to_row_bounds() {
        let mut app = app();
        app.update(Action::EventsLoaded(vec![
            push_event("a"),
            push_event("b"),
            push_event("c"),
        ]));

        app.update(Action::NavigateBottom);
        assert_eq!(app.table_state.selected(), Some(2));
        app.update(Action::NavigateDown);
        assert_eq!(app.table_state.selected(), Some(2));
        app.update(Action::NavigateTop);
        assert_eq!(app.table_state.selected(), Some(0));
        app.update(Action::NavigateUp);
        assert_eq!(app.table_state.selected(), Some(0));
        // Both variants track the same selection.
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn switch_layout_flips_variant() {
        let mut app = app();
        app.update(Action::SwitchLayout);
        assert_eq!(app.layout, FeedLayout::Table);
        app.update(Action::SwitchLayout);
        assert_eq!(app.layout, FeedLayout::List);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app();
        let effects = app.update(Action::Quit);
        assert!(app.should_quit);
        assert!(matches!(effects.as_slice(), [Effect::Quit]));
    }
}
