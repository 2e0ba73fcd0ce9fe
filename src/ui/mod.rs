// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": the [`gallery`] component owns its
//! state and reports side effects upward instead of performing them.
//!
//! - [`gallery`] - Strip, featured slot and lightbox
//! - [`state`] - Window-free interaction state (zoom, drag, timers, frames)
//! - [`widgets`] - Custom Iced widgets (zoomable image, scroll lock)
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Colors, spacing and sizing constants
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod gallery;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
