// SPDX-License-Identifier: MPL-2.0
//! Gallery model: the ordered items and which one is active.
//!
//! Navigation wraps in both directions. The active index is always within
//! `[0, len)` while the gallery has items.

pub mod item;
pub mod manifest;

pub use item::{CropPosition, GalleryItem, ThumbnailAttributes};
pub use manifest::{load_source, GallerySource};

use std::path::Path;

/// Direction for navigating between items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Previous,
    Next,
}

impl NavigationDirection {
    /// Signed step (`-1` or `+1`).
    #[must_use]
    pub fn offset(self) -> isize {
        match self {
            NavigationDirection::Previous => -1,
            NavigationDirection::Next => 1,
        }
    }
}

/// Index reached from `current` by one step, wrapping around both ends.
///
/// Returns `None` for an empty gallery.
#[must_use]
pub fn wrap_index(current: usize, direction: NavigationDirection, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let current = current % count;
    Some(match direction {
        NavigationDirection::Next => (current + 1) % count,
        NavigationDirection::Previous => (current + count - 1) % count,
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    active: usize,
}

impl Gallery {
    #[must_use]
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self { items, active: 0 }
    }

    /// Creates a gallery starting at `active` (clamped into range).
    #[must_use]
    pub fn with_active(items: Vec<GalleryItem>, active: usize) -> Self {
        let active = active.min(items.len().saturating_sub(1));
        Self { items, active }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    /// Index of the active item, `None` when the gallery is empty.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.active)
    }

    #[must_use]
    pub fn active_item(&self) -> Option<&GalleryItem> {
        self.items.get(self.active)
    }

    /// Marks `index` active. Out-of-range indices are ignored.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    /// Moves the active index one step and returns it.
    pub fn navigate(&mut self, direction: NavigationDirection) -> Option<usize> {
        let next = wrap_index(self.active, direction, self.items.len())?;
        self.active = next;
        Some(next)
    }

    /// Index of the item whose featured source is `source`.
    #[must_use]
    pub fn index_of_source(&self, source: &Path) -> Option<usize> {
        self.items.iter().position(|item| item.image_src == source)
    }
}
