// SPDX-License-Identifier: MPL-2.0
//! Single/double click disambiguation for thumbnails.
//!
//! A first click only schedules its action. If the same thumbnail is clicked
//! again before the window elapses, the scheduled action is cancelled and the
//! pair counts as a double click. A click on another thumbnail supersedes the
//! pending one.

use super::timer::{ScheduledTask, TimerToken};

/// What the caller must do after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Start a timer with this token; the single-click action runs when it
    /// fires.
    Schedule(TimerToken),
    /// Second click on the same item: run the double-click action now.
    DoubleClick(usize),
}

#[derive(Debug, Clone, Default)]
pub struct ClickDisambiguator {
    timer: ScheduledTask,
    pending_index: Option<usize>,
}

impl ClickDisambiguator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a click on the item at `index`.
    pub fn register_click(&mut self, index: usize) -> ClickOutcome {
        if self.timer.is_pending() && self.pending_index == Some(index) {
            self.timer.cancel();
            self.pending_index = None;
            return ClickOutcome::DoubleClick(index);
        }

        self.pending_index = Some(index);
        ClickOutcome::Schedule(self.timer.schedule())
    }

    /// Resolves a timer firing into the item whose single click is due.
    pub fn timer_fired(&mut self, token: TimerToken) -> Option<usize> {
        if self.timer.fire(token) {
            self.pending_index.take()
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
        self.pending_index = None;
    }

    #[must_use]
    pub fn pending(&self) -> Option<(usize, TimerToken)> {
        self.pending_index.zip(self.timer.pending_token())
    }
}
