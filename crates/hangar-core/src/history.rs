use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const DEFAULT_HISTORY_LIMIT: usize = 30;

/// Bounded undo/redo history over immutable snapshots.
///
/// Every transition borrows the receiver and returns a new history, so a
/// caller holding the previous value still sees it unchanged. `prevs` and
/// `nexts` keep the most recent entry at the front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "HistorySnapshot<T>")]
pub struct History<T> {
    current: T,
    prevs: VecDeque<T>,
    nexts: VecDeque<T>,
    limit: usize,
}

/// Wire form of a [`History`], normalised on the way in.
#[derive(Deserialize)]
struct HistorySnapshot<T> {
    current: T,
    prevs: VecDeque<T>,
    nexts: VecDeque<T>,
    limit: usize,
}

impl<T> From<HistorySnapshot<T>> for History<T> {
    fn from(snapshot: HistorySnapshot<T>) -> Self {
        let limit = snapshot.limit.max(1);
        let mut prevs = snapshot.prevs;
        prevs.truncate(limit);
        Self {
            current: snapshot.current,
            prevs,
            nexts: snapshot.nexts,
            limit,
        }
    }
}

impl<T: Clone + PartialEq> History<T> {
    pub fn new(value: T) -> Self {
        Self::with_limit(value, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(value: T, limit: usize) -> Self {
        Self {
            current: value,
            prevs: VecDeque::new(),
            nexts: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn into_current(self) -> T {
        self.current
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn undo_depth(&self) -> usize {
        self.prevs.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.nexts.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.prevs.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.nexts.is_empty()
    }

    /// Records `value` as a new undoable step. Setting an equal value is a no-op.
    pub fn set_current(&self, value: T) -> Self {
        if value == self.current {
            return self.clone();
        }
        let mut prevs = self.prevs.clone();
        prevs.push_front(self.current.clone());
        prevs.truncate(self.limit);
        tracing::trace!(undo_depth = prevs.len(), "history step recorded");
        Self {
            current: value,
            prevs,
            nexts: VecDeque::new(),
            limit: self.limit,
        }
    }

    /// Swaps the current value without recording a step, e.g. for live drag previews.
    pub fn replace_current(&self, value: T) -> Self {
        Self {
            current: value,
            prevs: self.prevs.clone(),
            nexts: self.nexts.clone(),
            limit: self.limit,
        }
    }

    pub fn undo(&self) -> Self {
        let mut prevs = self.prevs.clone();
        let Some(previous) = prevs.pop_front() else {
            return self.clone();
        };
        let mut nexts = self.nexts.clone();
        nexts.push_front(self.current.clone());
        tracing::trace!(undo_depth = prevs.len(), redo_depth = nexts.len(), "history undo");
        Self {
            current: previous,
            prevs,
            nexts,
            limit: self.limit,
        }
    }

    pub fn redo(&self) -> Self {
        let mut nexts = self.nexts.clone();
        let Some(next) = nexts.pop_front() else {
            return self.clone();
        };
        let mut prevs = self.prevs.clone();
        prevs.push_front(self.current.clone());
        prevs.truncate(self.limit);
        tracing::trace!(undo_depth = prevs.len(), redo_depth = nexts.len(), "history redo");
        Self {
            current: next,
            prevs,
            nexts,
            limit: self.limit,
        }
    }
}
