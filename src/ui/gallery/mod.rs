// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: thumbnail strip, featured slot and lightbox.
//!
//! [`component`] owns the interaction rules and emits [`Effect`]s for the
//! application to act on; [`view`] renders whatever the last frame batch
//! painted.

pub mod component;
pub mod geometry;
pub mod view;

pub use component::{Effect, Message, State};
pub use view::view;
