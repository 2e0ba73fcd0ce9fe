// SPDX-License-Identifier: MPL-2.0
pub mod scroll_lock;
pub mod zoom_image;

pub use scroll_lock::{scroll_lock, ScrollLock};
pub use zoom_image::{PointerEvent, ZoomImage};
