//! # Undo/Redo History
//!
//! Snapshot history over any cloneable state.
//!
//! ## Design
//!
//! - `present` is the only state callers render
//! - Recording pushes the old `present` onto `past` and clears `future`
//! - Undo and redo swap `present` with the nearest snapshot on the other side,
//!   carrying that snapshot's action label and timestamp across
//! - Every transition is total: an empty side makes undo/redo a no-op
//! - Records arriving in `EditMode::Replaying` are dropped without touching
//!   anything, so re-applying `present` after undo cannot erase redo history
//! - `past` is unbounded unless a limit is set, in which case the oldest
//!   snapshots are evicted first
//!
//! ## Example
//!
//! ```rust
//! use storyline_editor::{ActionType, EditMode, History};
//!
//! let mut history = History::new(String::from("a"));
//! history.record(String::from("ab"), ActionType::UpdatePanelText, EditMode::Normal);
//!
//! history.undo();
//! assert_eq!(history.present(), "a");
//!
//! history.redo();
//! assert_eq!(history.present(), "ab");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Which edit produced a history transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    UpdatePanelText,
    CreatePanel,
    CreatePage,
    CreateChapter,
    RenameChapter,
}

impl ActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::UpdatePanelText => "UPDATE_PANEL_TEXT",
            ActionType::CreatePanel => "CREATE_PANEL",
            ActionType::CreatePage => "CREATE_PAGE",
            ActionType::CreateChapter => "CREATE_CHAPTER",
            ActionType::RenameChapter => "RENAME_CHAPTER",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a state change is authoritative or a re-application of `present`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// A user edit; recorded in history
    #[default]
    Normal,
    /// Echo of an undo/redo re-render; never recorded
    Replaying,
}

/// One recorded state plus the action that moved away from it
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    pub state: T,
    pub action_type: ActionType,
    pub timestamp: DateTime<Utc>,
}

/// The three ways history can move
#[derive(Debug, Clone, PartialEq)]
pub enum Transition<T> {
    Record { state: T, action_type: ActionType },
    Undo,
    Redo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct History<T> {
    /// Oldest first
    past: VecDeque<Snapshot<T>>,

    present: T,

    /// Nearest first
    future: VecDeque<Snapshot<T>>,

    /// Maximum `past` length (None = unbounded)
    limit: Option<usize>,
}

impl<T: Clone> History<T> {
    /// Unbounded history starting at `initial`
    pub fn new(initial: T) -> Self {
        Self::with_limit(initial, None)
    }

    /// History keeping at most `limit` past snapshots; `Some(0)` is unbounded
    pub fn with_limit(initial: T, limit: Option<usize>) -> Self {
        Self {
            past: VecDeque::new(),
            present: initial,
            future: VecDeque::new(),
            limit: limit.filter(|levels| *levels > 0),
        }
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    /// Apply one transition; returns whether anything changed
    pub fn apply(&mut self, transition: Transition<T>) -> bool {
        match transition {
            Transition::Record { state, action_type } => {
                let previous = std::mem::replace(&mut self.present, state);
                self.past.push_back(Snapshot {
                    state: previous,
                    action_type,
                    timestamp: Utc::now(),
                });

                if let Some(limit) = self.limit {
                    while self.past.len() > limit {
                        self.past.pop_front();
                    }
                }

                // New action invalidates future
                self.future.clear();

                tracing::debug!(action = %action_type, undo_levels = self.past.len(), "history: record");
                true
            }

            Transition::Undo => {
                let Some(entry) = self.past.pop_back() else {
                    tracing::trace!("history: nothing to undo");
                    return false;
                };

                let previous = std::mem::replace(&mut self.present, entry.state);
                self.future.push_front(Snapshot {
                    state: previous,
                    action_type: entry.action_type,
                    timestamp: entry.timestamp,
                });

                tracing::debug!(action = %entry.action_type, redo_levels = self.future.len(), "history: undo");
                true
            }

            Transition::Redo => {
                let Some(entry) = self.future.pop_front() else {
                    tracing::trace!("history: nothing to redo");
                    return false;
                };

                let previous = std::mem::replace(&mut self.present, entry.state);
                self.past.push_back(Snapshot {
                    state: previous,
                    action_type: entry.action_type,
                    timestamp: entry.timestamp,
                });

                tracing::debug!(action = %entry.action_type, undo_levels = self.past.len(), "history: redo");
                true
            }
        }
    }

    /// Make `state` the present, unless this is a replay echo
    pub fn record(&mut self, state: T, action_type: ActionType, mode: EditMode) -> bool {
        match mode {
            EditMode::Normal => self.apply(Transition::Record { state, action_type }),
            EditMode::Replaying => {
                tracing::debug!(action = %action_type, "history: replay suppressed");
                false
            }
        }
    }

    pub fn undo(&mut self) -> bool {
        self.apply(Transition::Undo)
    }

    pub fn redo(&mut self) -> bool {
        self.apply(Transition::Redo)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    /// Action that the next undo would reverse
    pub fn undo_label(&self) -> Option<ActionType> {
        self.past.back().map(|entry| entry.action_type)
    }

    /// Action that the next redo would re-apply
    pub fn redo_label(&self) -> Option<ActionType> {
        self.future.front().map(|entry| entry.action_type)
    }

    /// Past snapshots, oldest first
    pub fn past(&self) -> impl Iterator<Item = &Snapshot<T>> {
        self.past.iter()
    }

    /// Future snapshots, nearest first
    pub fn future(&self) -> impl Iterator<Item = &Snapshot<T>> {
        self.future.iter()
    }

    /// Drop all past and future snapshots, keeping `present`
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl<T: Clone + Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter_history(pushes: u32) -> History<u32> {
        let mut history = History::new(0);
        for value in 1..=pushes {
            history.record(value, ActionType::UpdatePanelText, EditMode::Normal);
        }
        history
    }

    #[test]
    fn test_history_creation() {
        let history = History::new(7u32);
        assert_eq!(*history.present(), 7);
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_and_undo() {
        let mut history = counter_history(1);
        assert_eq!(*history.present(), 1);
        assert_eq!(history.undo_levels(), 1);

        assert!(history.undo());
        assert_eq!(*history.present(), 0);
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 1);

        assert!(history.redo());
        assert_eq!(*history.present(), 1);
        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.redo_levels(), 0);
    }

    #[test]
    fn test_undo_on_empty_past_is_noop() {
        let mut history = History::new(3u32);
        let before = history.clone();
        assert!(!history.undo());
        assert_eq!(history, before);
    }

    #[test]
    fn test_redo_on_empty_future_is_noop() {
        let mut history = counter_history(2);
        let before = history.clone();
        assert!(!history.redo());
        assert_eq!(history, before);
    }

    #[test]
    fn test_new_record_clears_redo() {
        let mut history = counter_history(3);
        history.undo();
        history.undo();
        assert_eq!(history.redo_levels(), 2);

        history.record(99, ActionType::CreatePanel, EditMode::Normal);
        assert_eq!(history.redo_levels(), 0);
        assert!(!history.redo());
        assert_eq!(*history.present(), 99);
    }

    #[test]
    fn test_labels_follow_the_transition() {
        let mut history = History::new(0u32);
        history.record(1, ActionType::CreatePanel, EditMode::Normal);
        history.record(2, ActionType::UpdatePanelText, EditMode::Normal);

        assert_eq!(history.undo_label(), Some(ActionType::UpdatePanelText));
        history.undo();
        assert_eq!(history.redo_label(), Some(ActionType::UpdatePanelText));
        assert_eq!(history.undo_label(), Some(ActionType::CreatePanel));
    }

    #[test]
    fn test_undo_carries_snapshot_timestamp() {
        let mut history = counter_history(1);
        let recorded_at = history.past().next().unwrap().timestamp;

        history.undo();
        assert_eq!(history.future().next().unwrap().timestamp, recorded_at);

        history.redo();
        assert_eq!(history.past().next().unwrap().timestamp, recorded_at);
    }

    #[test]
    fn test_replaying_record_is_dropped() {
        let mut history = counter_history(2);
        history.undo();
        let before = history.clone();

        assert!(!history.record(42, ActionType::UpdatePanelText, EditMode::Replaying));
        assert_eq!(history, before);

        // The next authoritative record is not affected by the dropped one
        assert!(history.record(5, ActionType::UpdatePanelText, EditMode::Normal));
        assert_eq!(*history.present(), 5);
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut history = History::with_limit(0u32, Some(2));
        for value in 1..=3 {
            history.record(value, ActionType::UpdatePanelText, EditMode::Normal);
        }

        assert_eq!(history.undo_levels(), 2);
        let kept: Vec<u32> = history.past().map(|s| s.state).collect();
        assert_eq!(kept, vec![1, 2]);
    }

    #[test]
    fn test_zero_limit_is_unbounded() {
        let mut history = History::with_limit(0u32, Some(0));
        for value in 1..=5 {
            history.record(value, ActionType::UpdatePanelText, EditMode::Normal);
        }
        assert_eq!(history.undo_levels(), 5);
    }

    #[test]
    fn test_action_type_serialization() {
        let json = serde_json::to_string(&ActionType::UpdatePanelText).unwrap();
        assert_eq!(json, "\"UPDATE_PANEL_TEXT\"");
        assert_eq!(ActionType::CreateChapter.to_string(), "CREATE_CHAPTER");
    }
}
