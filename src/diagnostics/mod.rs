// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting activity reports.
//!
//! Captures user actions, warnings and load failures in a memory-bounded
//! circular buffer that can be exported as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: Owner of the buffer, fed directly or through
//!   [`DiagnosticsHandle`]s

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, SerializableEvent, UserAction};
