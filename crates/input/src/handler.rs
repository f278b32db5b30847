//! Per-frame action buffer.
//!
//! Terminal events arrive between ticks. The host pushes decoded actions here and
//! drains them in arrival order right before ticking the session.

use arrayvec::ArrayVec;
use crossterm::event::Event;

use crate::map::handle_event;
use crate::types::GameAction;

/// Actions kept per frame; extras are dropped.
pub const INPUT_QUEUE_CAPACITY: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: ArrayVec<GameAction, INPUT_QUEUE_CAPACITY>,
    dropped: u32,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and buffer a terminal event. Returns the action if it was kept.
    pub fn push_event(&mut self, event: &Event) -> Option<GameAction> {
        let action = handle_event(event)?;
        self.push(action).then_some(action)
    }

    /// Buffer an action. Returns false (and counts the drop) when full.
    pub fn push(&mut self, action: GameAction) -> bool {
        if self.pending.try_push(action).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        true
    }

    /// Take every buffered action, oldest first.
    ///
    /// Stack-only; does not allocate.
    pub fn drain(&mut self) -> ArrayVec<GameAction, INPUT_QUEUE_CAPACITY> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total actions dropped because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}
