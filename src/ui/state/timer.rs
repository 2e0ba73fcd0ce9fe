// SPDX-License-Identifier: MPL-2.0
//! Cancellable scheduled tasks.
//!
//! A timer is an async sleep that re-enters the update loop carrying the
//! [`TimerToken`] it was scheduled with. Cancelling or rescheduling bumps the
//! generation, so a sleep that was already in flight fires with a stale token
//! and is ignored.

use iced::Task;
use std::time::Duration;

/// Identifies one scheduling of a [`ScheduledTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A single cancellable slot (at most one pending firing).
#[derive(Debug, Clone, Default)]
pub struct ScheduledTask {
    generation: u64,
    pending: Option<TimerToken>,
}

impl ScheduledTask {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a new firing, superseding any pending one.
    pub fn schedule(&mut self) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken(self.generation);
        self.pending = Some(token);
        token
    }

    /// Cancels the pending firing. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending_token(&self) -> Option<TimerToken> {
        self.pending
    }

    /// Consumes a firing. Returns `true` only for the current token; the slot
    /// is then free.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

/// Builds the task that sleeps for `delay` then yields `on_fire(token)`.
pub fn sleep<M>(delay: Duration, token: TimerToken, on_fire: fn(TimerToken) -> M) -> Task<M>
where
    M: Send + 'static,
{
    Task::perform(
        async move {
            tokio::time::sleep(delay).await;
            token
        },
        on_fire,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduled_token_fires_once() {
        let mut task = ScheduledTask::new();
        let token = task.schedule();

        assert!(task.is_pending());
        assert!(task.fire(token));
        assert!(!task.is_pending());
        assert!(!task.fire(token));
    }

    #[test]
    fn cancelled_token_never_fires() {
        let mut task = ScheduledTask::new();
        let token = task.schedule();

        assert!(task.cancel());
        assert!(!task.fire(token));
    }

    #[test]
    fn rescheduling_makes_previous_token_stale() {
        let mut task = ScheduledTask::new();
        let stale = task.schedule();
        let fresh = task.schedule();

        assert_ne!(stale, fresh);
        assert!(!task.fire(stale));
        assert!(task.is_pending());
        assert!(task.fire(fresh));
    }

    #[test]
    fn cancel_without_pending_is_noop() {
        let mut task = ScheduledTask::new();
        assert!(!task.cancel());
    }
}
