// SPDX-License-Identifier: MPL-2.0
//! Per-frame coalescing of visual writes.
//!
//! Handlers never touch the [`Presentation`] directly. They read state, then
//! enqueue writes into the pending [`FrameBatch`]; the batch is applied as a
//! whole on the next animation frame. Several writes to the same property
//! within one frame coalesce, the last one wins.

use super::zoom::ZoomLevel;
use crate::config::LOADING_OPACITY;
use crate::media::ImageData;
use iced::Vector;
use std::path::PathBuf;

/// Pointer cursor shown over the lightbox image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    ZoomIn,
    ZoomOut,
    Grabbing,
}

impl CursorHint {
    /// Hint for an idle pointer at the given zoom: clicking at natural size
    /// zooms out, anywhere else it zooms in. Holding Shift always shows
    /// zoom-out.
    #[must_use]
    pub fn for_zoom(level: ZoomLevel, shift_held: bool) -> Self {
        if shift_held || level.is_full() {
            CursorHint::ZoomOut
        } else {
            CursorHint::ZoomIn
        }
    }
}

/// Cropped image in the featured slot.
#[derive(Debug, Clone)]
pub struct FeaturedView {
    pub index: usize,
    pub image: ImageData,
    pub caption: String,
}

/// Image shown in the lightbox.
#[derive(Debug, Clone)]
pub struct LightboxImage {
    pub source: PathBuf,
    pub image: ImageData,
}

/// Everything the view renders. Only changed by applying a [`FrameBatch`].
#[derive(Debug, Clone)]
pub struct Presentation {
    pub featured: Option<FeaturedView>,
    pub featured_opacity: f32,
    pub active_thumbnail: Option<usize>,
    pub lightbox_visible: bool,
    /// Background strip cannot scroll while set.
    pub scroll_locked: bool,
    pub lightbox_image: Option<LightboxImage>,
    pub lightbox_opacity: f32,
    pub zoom: ZoomLevel,
    pub translate: Vector,
    pub footer_visible: bool,
    pub cursor: CursorHint,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            featured: None,
            featured_opacity: 1.0,
            active_thumbnail: None,
            lightbox_visible: false,
            scroll_locked: false,
            lightbox_image: None,
            lightbox_opacity: 1.0,
            zoom: ZoomLevel::FULL,
            translate: Vector::new(0.0, 0.0),
            footer_visible: false,
            cursor: CursorHint::Default,
        }
    }
}

/// Visual writes waiting for the next frame.
#[derive(Debug, Clone, Default)]
pub struct FrameBatch {
    featured: Option<FeaturedView>,
    featured_opacity: Option<f32>,
    active_thumbnail: Option<Option<usize>>,
    lightbox_visible: Option<bool>,
    lightbox_image: Option<Option<LightboxImage>>,
    lightbox_opacity: Option<f32>,
    zoom: Option<ZoomLevel>,
    translate: Option<Vector>,
    footer_visible: Option<bool>,
    cursor: Option<CursorHint>,
}

impl FrameBatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.featured.is_none()
            && self.featured_opacity.is_none()
            && self.active_thumbnail.is_none()
            && self.lightbox_visible.is_none()
            && self.lightbox_image.is_none()
            && self.lightbox_opacity.is_none()
            && self.zoom.is_none()
            && self.translate.is_none()
            && self.footer_visible.is_none()
            && self.cursor.is_none()
    }

    /// Whether a zoom change (which also resets the pan) has not been
    /// painted yet. Drags must not start on top of it.
    #[must_use]
    pub fn has_pending_zoom_reset(&self) -> bool {
        self.zoom.is_some()
    }

    /// Featured image, caption and restored opacity in one write.
    pub fn show_featured(&mut self, featured: FeaturedView) {
        self.featured = Some(featured);
        self.featured_opacity = Some(1.0);
    }

    /// Dims the featured slot while its next image decodes.
    pub fn dim_featured(&mut self) {
        self.featured_opacity = Some(LOADING_OPACITY);
    }

    pub fn restore_featured_opacity(&mut self) {
        self.featured_opacity = Some(1.0);
    }

    /// Moves the thumbnail highlight; `None` clears it.
    pub fn highlight_thumbnail(&mut self, index: Option<usize>) {
        self.active_thumbnail = Some(index);
    }

    /// Shows or hides the overlay; page scroll is locked while it is visible.
    pub fn set_lightbox_visible(&mut self, visible: bool) {
        self.lightbox_visible = Some(visible);
    }

    pub fn set_lightbox_image(&mut self, image: Option<LightboxImage>) {
        self.lightbox_image = Some(image);
    }

    pub fn dim_lightbox(&mut self) {
        self.lightbox_opacity = Some(LOADING_OPACITY);
    }

    pub fn restore_lightbox_opacity(&mut self) {
        self.lightbox_opacity = Some(1.0);
    }

    /// Applies a zoom level. The pan is reset with it.
    pub fn set_zoom(&mut self, level: ZoomLevel) {
        self.zoom = Some(level);
        self.translate = Some(Vector::new(0.0, 0.0));
    }

    pub fn set_translate(&mut self, translate: Vector) {
        self.translate = Some(translate);
    }

    pub fn set_footer_visible(&mut self, visible: bool) {
        self.footer_visible = Some(visible);
    }

    pub fn set_cursor(&mut self, cursor: CursorHint) {
        self.cursor = Some(cursor);
    }

    /// Writes every pending property into `presentation`, leaving the batch
    /// empty.
    pub fn apply(&mut self, presentation: &mut Presentation) {
        let batch = std::mem::take(self);

        if let Some(featured) = batch.featured {
            presentation.featured = Some(featured);
        }
        if let Some(opacity) = batch.featured_opacity {
            presentation.featured_opacity = opacity;
        }
        if let Some(active) = batch.active_thumbnail {
            presentation.active_thumbnail = active;
        }
        if let Some(visible) = batch.lightbox_visible {
            presentation.lightbox_visible = visible;
            presentation.scroll_locked = visible;
        }
        if let Some(image) = batch.lightbox_image {
            presentation.lightbox_image = image;
        }
        if let Some(opacity) = batch.lightbox_opacity {
            presentation.lightbox_opacity = opacity;
        }
        if let Some(level) = batch.zoom {
            presentation.zoom = level;
        }
        if let Some(translate) = batch.translate {
            presentation.translate = translate;
        }
        if let Some(visible) = batch.footer_visible {
            presentation.footer_visible = visible;
        }
        if let Some(cursor) = batch.cursor {
            presentation.cursor = cursor;
        }
    }
}
