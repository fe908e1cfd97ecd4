//! Per-frame batching of style updates.
//!
//! Components that change style in response to input (hover, resize,
//! property changes) schedule the update instead of applying it
//! immediately. Updates are keyed by element and purpose: scheduling a new
//! update for the same key replaces the pending one, so only the latest
//! state is applied when the frame runs.

use crate::renderer::ElementId;
use std::fmt;

/// Identifies a pending update: which element, and what it updates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameKey {
    pub element: ElementId,
    pub purpose: String,
}

impl FrameKey {
    pub fn new(element: ElementId, purpose: impl Into<String>) -> Self {
        Self {
            element,
            purpose: purpose.into(),
        }
    }
}

/// Pending tasks in scheduling order, at most one per [`FrameKey`].
pub struct FrameScheduler<T> {
    pending: Vec<(FrameKey, T)>,
    frame_requested: bool,
}

impl<T> Default for FrameScheduler<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            frame_requested: false,
        }
    }
}

impl<T> fmt::Debug for FrameScheduler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("pending", &self.pending.iter().map(|(key, _)| key).collect::<Vec<_>>())
            .field("frame_requested", &self.frame_requested)
            .finish()
    }
}

impl<T> FrameScheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `task`, superseding a pending task with the same key.
    ///
    /// Returns `true` when the caller has to request a new frame, i.e. when
    /// nothing was pending since the last [`take_pending`](Self::take_pending).
    pub fn schedule(&mut self, key: FrameKey, task: T) -> bool {
        if self.cancel(&key) {
            log::trace!("frame task {:?} superseded", key);
        }
        self.pending.push((key, task));
        !std::mem::replace(&mut self.frame_requested, true)
    }

    /// Drops the pending task for `key`.
    pub fn cancel(&mut self, key: &FrameKey) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(pending, _)| pending != key);
        self.pending.len() != before
    }

    /// Drops every pending task of `element`, returning how many there were.
    pub fn cancel_element(&mut self, element: ElementId) -> usize {
        let before = self.pending.len();
        self.pending.retain(|(pending, _)| pending.element != element);
        before - self.pending.len()
    }

    /// Takes all pending tasks for running; the next schedule requests a new frame.
    pub fn take_pending(&mut self) -> Vec<(FrameKey, T)> {
        self.frame_requested = false;
        std::mem::take(&mut self.pending)
    }

    pub fn is_frame_requested(&self) -> bool {
        self.frame_requested
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
