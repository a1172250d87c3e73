/// Fixed-capacity ring of human-readable event lines.
///
/// Writes land at the cursor, which then advances and wraps to zero at
/// capacity. Once the ring is full the oldest line is overwritten; no count is
/// tracked beyond which slots have been written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventLog {
    entries: Vec<Option<String>>,
    cursor: usize,
}

impl EventLog {
    /// Creates a log holding at most `capacity` lines (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: vec![None; capacity.max(1)],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Slot the next write goes to.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn push(&mut self, event: impl Into<String>) {
        self.entries[self.cursor] = Some(event.into());
        self.cursor += 1;
        if self.cursor == self.entries.len() {
            self.cursor = 0;
        }
    }

    /// Retained lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        let (newer, older) = self.entries.split_at(self.cursor);
        older.iter().chain(newer).filter_map(|entry| entry.as_deref())
    }

    /// Most recently written line.
    pub fn latest(&self) -> Option<&str> {
        let index = self
            .cursor
            .checked_sub(1)
            .unwrap_or(self.entries.len() - 1);
        self.entries[index].as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(crate::config::GameConfig::DEFAULT_EVENT_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_entries_in_write_order_before_wrapping() {
        let mut log = EventLog::with_capacity(4);
        log.push("a");
        log.push("b");

        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(log.latest(), Some("b"));
        assert_eq!(log.cursor(), 2);
    }

    #[test]
    fn overflow_overwrites_the_oldest_entry() {
        let mut log = EventLog::with_capacity(10);
        for i in 0..11 {
            log.push(format!("event {i}"));
        }

        let kept: Vec<_> = log.iter().collect();
        assert_eq!(kept.len(), 10);
        assert_eq!(kept.first(), Some(&"event 1"));
        assert_eq!(kept.last(), Some(&"event 10"));
        assert_eq!(log.cursor(), 1);
    }

    #[test]
    fn cursor_wraps_to_zero_at_capacity() {
        let mut log = EventLog::with_capacity(3);
        for _ in 0..3 {
            log.push("x");
        }

        assert_eq!(log.cursor(), 0);
        assert_eq!(log.latest(), Some("x"));
    }

    #[test]
    fn empty_log_has_no_latest_entry() {
        let log = EventLog::with_capacity(2);
        assert!(log.is_empty());
        assert_eq!(log.latest(), None);
        assert_eq!(log.iter().count(), 0);
    }
}
