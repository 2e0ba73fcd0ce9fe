// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The update loop logs straight into the collector. Background tasks get a
//! [`DiagnosticsHandle`] and send through a bounded channel; the collector
//! drains it with [`DiagnosticsCollector::process_pending`].

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::Serialize;

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, SerializableEvent,
    UserAction,
};
use crate::error::ImageLoadError;

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sending never blocks: events are dropped when the
/// channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        let _ = self.try_log(DiagnosticEventKind::UserAction {
            action,
            details: None,
        });
    }

    pub fn log_warning(&self, key: impl Into<String>) {
        let _ = self.try_log(DiagnosticEventKind::Warning { key: key.into() });
    }

    pub fn log_load_failure(&self, error: &ImageLoadError) {
        let _ = self.try_log(load_failure(error));
    }

    /// Sends an event, reporting whether it was accepted.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the channel buffer is full, or
    /// `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log(&self, kind: DiagnosticEventKind) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct Report<'a> {
    started_at: String,
    event_count: usize,
    events: &'a [SerializableEvent],
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every event waiting in the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    pub fn log_action(&mut self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&mut self, action: UserAction, details: Option<String>) {
        self.push(DiagnosticEventKind::UserAction { action, details });
    }

    /// Records a warning by its i18n key.
    pub fn log_warning(&mut self, key: impl Into<String>) {
        self.push(DiagnosticEventKind::Warning { key: key.into() });
    }

    /// Records a failed image load. Also echoed to stderr.
    pub fn log_load_failure(&mut self, error: &ImageLoadError) {
        eprintln!("{error}");
        self.push(load_failure(error));
    }

    fn push(&mut self, kind: DiagnosticEventKind) {
        self.process_pending();
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Iterates stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Exports the stored events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<SerializableEvent> =
            self.buffer.iter().map(SerializableEvent::from).collect();
        let report = Report {
            started_at: self.started_at.to_rfc3339(),
            event_count: events.len(),
            events: &events,
        };
        serde_json::to_string_pretty(&report)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .field("started_at", &self.started_at)
            .finish()
    }
}

fn load_failure(error: &ImageLoadError) -> DiagnosticEventKind {
    DiagnosticEventKind::Error {
        kind: error.kind(),
        message: error.to_string(),
    }
}
