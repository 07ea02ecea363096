use std::collections::VecDeque;

use super::{ClickArgs, DragSelectArgs};

/// Listener payload waiting for the next paint boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingEmission {
    Click(ClickArgs),
    DblClick(ClickArgs),
    DragSelect(DragSelectArgs),
}

/// Single-shot work items delivered after the next rendered frame.
///
/// Items queued while a batch is being delivered wait for the following
/// boundary.
#[derive(Debug)]
pub struct AfterRenderQueue<T> {
    pending: VecDeque<T>,
}

impl<T> Default for AfterRenderQueue<T> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }
}

impl<T> AfterRenderQueue<T> {
    pub fn schedule(&mut self, item: T) {
        self.pending.push_back(item);
    }

    /// Takes every item scheduled so far, oldest first.
    #[must_use]
    pub fn drain_ready(&mut self) -> Vec<T> {
        self.pending.drain(..).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
