//! One-shot deferred tasks driven by the tick loop.
//!
//! Tasks are never run from the call that schedules them. They fire from a later
//! [`DeferredQueue::advance`] once their delay has elapsed, so anything the host queued
//! for the current frame is processed before the task takes effect.

use arrayvec::ArrayVec;

/// Maximum number of pending tasks.
pub const MAX_DEFERRED: usize = 4;

/// Work that can be deferred to a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredTask {
    /// Start accepting jump input
    EnableInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    task: DeferredTask,
    remaining_ms: u32,
}

#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    pending: ArrayVec<Pending, MAX_DEFERRED>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire once `delay_ms` has elapsed.
    ///
    /// Returns false when the queue is full.
    pub fn schedule(&mut self, task: DeferredTask, delay_ms: u32) -> bool {
        self.pending
            .try_push(Pending {
                task,
                remaining_ms: delay_ms,
            })
            .is_ok()
    }

    /// Count down every pending task and return the ones that are due, in scheduling order.
    pub fn advance(&mut self, elapsed_ms: u32) -> ArrayVec<DeferredTask, MAX_DEFERRED> {
        let mut due = ArrayVec::new();
        self.pending.retain(|p| {
            p.remaining_ms = p.remaining_ms.saturating_sub(elapsed_ms);
            if p.remaining_ms == 0 {
                due.push(p.task);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Milliseconds until `task` fires, if it is pending.
    pub fn remaining_ms(&self, task: DeferredTask) -> Option<u32> {
        self.pending
            .iter()
            .find(|p| p.task == task)
            .map(|p| p.remaining_ms)
    }
}
