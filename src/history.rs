//! Visited-location history with saved scroll offsets.
//!
//! An explicit, bounded service in place of ambient browser history: one
//! entry per committed navigation, appended in order, oldest dropped first.

use std::collections::VecDeque;

use parking_lot::RwLock;

use crate::types::{Location, ScrollPosition};

/// One committed navigation and the offset saved while it was current.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// The committed location.
    pub location: Location,
    /// Viewport offset last recorded while this entry was current.
    pub scroll: ScrollPosition,
}

/// Bounded, append-only log of visited locations.
#[derive(Debug)]
pub struct History {
    entries: RwLock<VecDeque<HistoryEntry>>,
    capacity: usize,
}

impl History {
    /// Create a history retaining at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    /// Append a committed location, dropping the oldest entry when full.
    ///
    /// New entries start scrolled to the top.
    pub fn push(&self, location: Location) {
        let mut entries = self.entries.write();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(HistoryEntry {
            location,
            scroll: ScrollPosition::top(),
        });
    }

    /// Save the viewport offset on the current (most recent) entry.
    pub fn record_scroll(&self, position: ScrollPosition) {
        if let Some(entry) = self.entries.write().back_mut() {
            entry.scroll = position;
        }
    }

    /// The entry a back navigation would return to, if any.
    pub fn back_target(&self) -> Option<HistoryEntry> {
        let entries = self.entries.read();
        if entries.len() < 2 {
            return None;
        }
        entries.get(entries.len() - 2).cloned()
    }

    /// Discard the current entry after a back navigation committed.
    pub fn pop(&self) {
        self.entries.write().pop_back();
    }

    /// The current entry's location, if any.
    pub fn current(&self) -> Option<Location> {
        self.entries.read().back().map(|entry| entry.location.clone())
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_target_is_the_previous_entry() {
        let history = History::new(8);
        history.push(Location::parse("/"));
        history.push(Location::parse("/products"));
        history.push(Location::parse("/services"));

        let target = history.back_target().unwrap();
        assert_eq!(target.location.path, "/products");
    }

    #[test]
    fn record_scroll_updates_current_entry_only() {
        let history = History::new(8);
        history.push(Location::parse("/products"));
        history.record_scroll(ScrollPosition::new(0, 400));
        history.push(Location::parse("/services"));

        let target = history.back_target().unwrap();
        assert_eq!(target.scroll, ScrollPosition::new(0, 400));
    }

    #[test]
    fn capacity_drops_oldest_first() {
        let history = History::new(2);
        history.push(Location::parse("/a"));
        history.push(Location::parse("/b"));
        history.push(Location::parse("/c"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.back_target().unwrap().location.path, "/b");
    }

    #[test]
    fn no_back_target_from_a_single_entry() {
        let history = History::new(8);
        assert!(history.back_target().is_none());
        history.push(Location::parse("/"));
        assert!(history.back_target().is_none());
    }

    #[test]
    fn pop_discards_current() {
        let history = History::new(8);
        history.push(Location::parse("/"));
        history.push(Location::parse("/products"));
        history.pop();
        assert_eq!(history.current().unwrap().path, "/");
    }
}
