use crate::domain::FeedEvent;

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NavigateUp,
    NavigateDown,
    NavigateTop,
    NavigateBottom,

    // UI
    ToggleHelp,
    SwitchLayout,

    // Data responses
    EventsLoaded(Vec<FeedEvent>),

    // App control
    Refresh,
    Quit,
    Tick,
    Error(String),
    ClearError,
    TogglePolling,
}
