// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

/// User-initiated actions worth correlating with failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Gallery
    // ==========================================================================
    /// Step to the next item.
    NavigateNext,

    /// Step to the previous item.
    NavigatePrevious,

    /// Feature a thumbnail by single click.
    SelectItem { index: usize },

    // ==========================================================================
    // Lightbox
    // ==========================================================================
    /// Open the lightbox, by double click on a thumbnail or click on the
    /// featured image.
    OpenLightbox { index: usize },

    CloseLightbox,

    /// Toggle between natural size and fit-to-screen.
    ToggleZoom,

    ZoomIn,

    ZoomOut,

    /// Press-and-hold magnification.
    LensZoom,

    /// Show or hide the controls footer.
    ToggleControls { visible: bool },
}

/// A diagnostic event with its wall-clock timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped now.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        /// Optional context, such as the item title.
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    /// Non-critical issue, identified by its i18n key.
    Warning { key: String },

    /// Failed operation. The gallery keeps running.
    Error { kind: ErrorKind, message: String },
}

/// Event as written to the JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    /// RFC 3339 timestamp.
    pub timestamp: String,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl From<&DiagnosticEvent> for SerializableEvent {
    fn from(event: &DiagnosticEvent) -> Self {
        Self {
            timestamp: event.timestamp.to_rfc3339(),
            kind: event.kind.clone(),
        }
    }
}
