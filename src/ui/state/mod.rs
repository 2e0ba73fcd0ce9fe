// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure interaction state for the gallery, kept apart from the Iced widgets
//! so every rule can be exercised without a window.

pub mod click;
pub mod drag;
pub mod frame;
pub mod lightbox;
pub mod timer;
pub mod zoom;

// Re-export commonly used types for convenience
pub use click::{ClickDisambiguator, ClickOutcome};
pub use drag::DragState;
pub use frame::{CursorHint, FeaturedView, FrameBatch, LightboxImage, Presentation};
pub use lightbox::{LightboxEvent, LightboxMode, ReturnMode};
pub use timer::{ScheduledTask, TimerToken};
pub use zoom::{ZoomLevel, ZoomState};
