//! One-shot deferred callbacks (setTimeout)
//!
//! Time is virtual: the embedder advances the clock and receives every
//! timer that came due. Timers are fire-and-forget and cannot be cleared.

use std::time::Duration;

/// Timer identifier, unique per manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u32);

/// Work to run when a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Remove the visible class from the success toast
    HideNotification,
}

/// Timer entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    pub id: TimerId,
    pub task: TimerTask,
    /// Clock reading at which the timer fires
    pub due_at: Duration,
}

/// Timer manager
#[derive(Debug, Default)]
pub struct TimerManager {
    now: Duration,
    next_id: u32,
    timers: Vec<Timer>,
}

impl TimerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to fire once `delay` has elapsed from now
    pub fn set_timeout(&mut self, task: TimerTask, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.timers.push(Timer {
            id,
            task,
            due_at: self.now + delay,
        });
        tracing::trace!("timer {:?} scheduled for {:?}", id, self.now + delay);
        id
    }

    /// Move the clock forward and take every timer that came due,
    /// ordered by due time then scheduling order
    pub fn advance(&mut self, by: Duration) -> Vec<Timer> {
        self.now += by;
        let now = self.now;

        let (mut ready, pending): (Vec<Timer>, Vec<Timer>) =
            self.timers.drain(..).partition(|t| t.due_at <= now);
        self.timers = pending;

        ready.sort_by_key(|t| (t.due_at, t.id));
        ready
    }

    /// Number of timers still waiting
    pub fn pending(&self) -> usize {
        self.timers.len()
    }
}
