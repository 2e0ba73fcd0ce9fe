// SPDX-License-Identifier: MPL-2.0
//! Gallery state persistence.
//!
//! Writes are synchronous and small; a failure is reported as a warning and
//! never interrupts the session.

use super::persisted_state::{AppState, StateStore};
use crate::diagnostics::DiagnosticsHandle;

/// Stores the footer visibility, reporting a failed write.
///
/// Returns whether the write succeeded.
pub fn persist_controls_visible(
    store: &StateStore,
    app_state: &mut AppState,
    visible: bool,
    diagnostics: &DiagnosticsHandle,
) -> bool {
    app_state.controls_visible = visible;
    match store.save(app_state) {
        None => true,
        Some(key) => {
            eprintln!("Failed to save gallery state: {key}");
            diagnostics.log_warning(key);
            false
        }
    }
}
