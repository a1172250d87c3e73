/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of lines each level's event log retains.
    pub event_log_capacity: usize,
}

impl GameConfig {
    pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self {
            event_log_capacity: Self::DEFAULT_EVENT_LOG_CAPACITY,
        }
    }

    pub fn with_event_log_capacity(event_log_capacity: usize) -> Self {
        Self {
            event_log_capacity: event_log_capacity.max(1),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
