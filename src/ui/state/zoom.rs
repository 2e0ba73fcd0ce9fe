// SPDX-License-Identifier: MPL-2.0
//! Lightbox zoom state.
//!
//! Zoom is expressed as a magnification factor of the image's natural size
//! (1.0 = every image pixel on one screen pixel). The lightbox never
//! magnifies beyond natural size.

pub use crate::config::{DEFAULT_FIT_MARGIN, DEFAULT_ZOOM_STEP, MAX_ZOOM, MIN_ZOOM};
use iced::Size;

/// Magnification factor, guaranteed to be within `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    /// Natural size.
    pub const FULL: Self = Self(MAX_ZOOM);

    /// Creates a zoom level, clamping the value to the valid range.
    ///
    /// Non-finite input (a zero-sized image produces infinities) maps to
    /// natural size.
    #[must_use]
    pub fn new(level: f32) -> Self {
        if level.is_nan() {
            return Self::FULL;
        }
        Self(level.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether this level shows the image at natural size.
    #[must_use]
    pub fn is_full(self) -> bool {
        self.0 >= MAX_ZOOM
    }

    /// Increases zoom by `step`, capped at natural size.
    #[must_use]
    pub fn zoom_in(self, step: f32) -> Self {
        Self::new(self.0 + step)
    }

    /// Decreases zoom by `step`, never going below `floor` (nor `MIN_ZOOM`).
    #[must_use]
    pub fn zoom_out(self, step: f32, floor: ZoomLevel) -> Self {
        Self::new((self.0 - step).max(floor.0))
    }

    /// Displayed size of an image with the given natural size.
    #[must_use]
    pub fn scaled(self, natural: Size) -> Size {
        Size::new(natural.width * self.0, natural.height * self.0)
    }

    /// Zoom percentage for display (e.g. `45`).
    #[must_use]
    pub fn percent(self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.0 * 100.0).round() as u32;
        percent
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::FULL
    }
}

/// Magnification that fits an image inside `margin` of the viewport,
/// preserving aspect ratio.
///
/// `fit = min(margin * viewport_h / natural_h, margin * viewport_w / natural_w)`
///
/// Returns `None` when either size is degenerate; the caller then keeps
/// natural size.
#[must_use]
pub fn fit_to_screen_zoom(natural: Size, viewport: Size, margin: f32) -> Option<f32> {
    if natural.width <= 0.0 || natural.height <= 0.0 {
        return None;
    }
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }

    let vertical = (viewport.height * margin) / natural.height;
    let horizontal = (viewport.width * margin) / natural.width;
    let fit = vertical.min(horizontal);

    fit.is_finite().then_some(fit)
}

/// Zoom bookkeeping for the open lightbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    /// Level currently displayed.
    pub level: ZoomLevel,
    /// Fit-to-screen level computed when the image became available.
    /// Kept verbatim so toggling back lands on exactly the same value.
    pub fit: ZoomLevel,
    /// Increment for the `+` / `-` keys.
    pub step: f32,
    /// Share of the viewport a fitted image may occupy.
    pub fit_margin: f32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            level: ZoomLevel::FULL,
            fit: ZoomLevel::FULL,
            step: DEFAULT_ZOOM_STEP,
            fit_margin: DEFAULT_FIT_MARGIN,
        }
    }
}

impl ZoomState {
    #[must_use]
    pub fn new(step: f32, fit_margin: f32) -> Self {
        Self {
            step,
            fit_margin,
            ..Self::default()
        }
    }

    /// Recomputes the fit level for an image in a viewport and returns it.
    pub fn refresh_fit(&mut self, natural: Size, viewport: Size) -> ZoomLevel {
        self.fit = fit_to_screen_zoom(natural, viewport, self.fit_margin)
            .map_or(ZoomLevel::FULL, ZoomLevel::new);
        self.fit
    }

    /// Applies a requested level, clamped, and returns what was applied.
    pub fn set(&mut self, level: f32) -> ZoomLevel {
        self.level = ZoomLevel::new(level);
        self.level
    }

    pub fn apply_fit(&mut self) -> ZoomLevel {
        self.level = self.fit;
        self.level
    }

    pub fn apply_full(&mut self) -> ZoomLevel {
        self.level = ZoomLevel::FULL;
        self.level
    }

    /// Next level for the zoom-in key.
    #[must_use]
    pub fn stepped_in(&self) -> ZoomLevel {
        self.level.zoom_in(self.step)
    }

    /// Next level for the zoom-out key; the floor is the fit level.
    #[must_use]
    pub fn stepped_out(&self) -> ZoomLevel {
        self.level.zoom_out(self.step, self.fit)
    }

    pub fn reset(&mut self) {
        self.level = ZoomLevel::FULL;
        self.fit = ZoomLevel::FULL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn zoom_level_clamps_above_max() {
        assert_eq!(ZoomLevel::new(5.0).value(), 1.0);
    }

    #[test]
    fn zoom_level_clamps_below_min() {
        assert_eq!(ZoomLevel::new(-1.0).value(), 0.1);
    }

    #[test]
    fn zoom_level_maps_nan_to_full() {
        assert!(ZoomLevel::new(f32::NAN).is_full());
    }

    #[test]
    fn fit_zoom_picks_the_tighter_axis() {
        let fit = fit_to_screen_zoom(
            Size::new(2000.0, 1000.0),
            Size::new(1000.0, 800.0),
            DEFAULT_FIT_MARGIN,
        )
        .expect("valid sizes");
        assert_abs_diff_eq!(fit, 0.45, epsilon = 1e-6);
    }

    #[test]
    fn fit_zoom_rejects_degenerate_sizes() {
        assert!(fit_to_screen_zoom(Size::new(0.0, 10.0), Size::new(100.0, 100.0), 0.9).is_none());
        assert!(fit_to_screen_zoom(Size::new(10.0, 10.0), Size::new(100.0, 0.0), 0.9).is_none());
    }

    #[test]
    fn small_images_fit_at_natural_size() {
        let mut state = ZoomState::default();
        let fit = state.refresh_fit(Size::new(200.0, 100.0), Size::new(1000.0, 800.0));
        assert!(fit.is_full());
    }

    #[test]
    fn zoom_out_stops_at_fit_level() {
        let mut state = ZoomState::default();
        state.refresh_fit(Size::new(2000.0, 1000.0), Size::new(1000.0, 800.0));
        state.set(0.5);

        let next = state.stepped_out();
        assert_abs_diff_eq!(next.value(), state.fit.value(), epsilon = 1e-6);
    }

    #[test]
    fn zoom_in_caps_at_natural_size() {
        let mut state = ZoomState::default();
        state.set(0.95);
        assert!(state.stepped_in().is_full());
    }

    #[test]
    fn scaled_multiplies_natural_size() {
        let size = ZoomLevel::new(0.5).scaled(Size::new(800.0, 600.0));
        assert_eq!(size, Size::new(400.0, 300.0));
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(ZoomLevel::new(0.456).percent(), 46);
    }
}
