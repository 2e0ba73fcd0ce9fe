// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Lightbox zoom bounds, step and fit margin
//! - **Interaction**: Click debounce, lens hold delay, drag threshold
//! - **Gallery**: Featured slot geometry and default crop
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Smallest lightbox magnification.
pub const MIN_ZOOM: f32 = 0.1;

/// Largest lightbox magnification (natural size).
pub const MAX_ZOOM: f32 = 1.0;

/// Default zoom step for the `+` / `-` keys.
pub const DEFAULT_ZOOM_STEP: f32 = 0.1;

/// Minimum allowed zoom step.
pub const MIN_ZOOM_STEP: f32 = 0.01;

/// Maximum allowed zoom step.
pub const MAX_ZOOM_STEP: f32 = 0.5;

/// Share of the viewport a fitted image may occupy.
pub const DEFAULT_FIT_MARGIN: f32 = 0.9;

/// Minimum fit margin.
pub const MIN_FIT_MARGIN: f32 = 0.5;

/// Maximum fit margin.
pub const MAX_FIT_MARGIN: f32 = 1.0;

// ==========================================================================
// Interaction Defaults
// ==========================================================================

/// Window in which a second thumbnail click becomes a double-click.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 150;

/// Minimum double-click window.
pub const MIN_DOUBLE_CLICK_MS: u64 = 50;

/// Maximum double-click window.
pub const MAX_DOUBLE_CLICK_MS: u64 = 1000;

/// How long the pointer must stay pressed before the lens engages.
pub const DEFAULT_LENS_HOLD_MS: u64 = 300;

/// Minimum lens hold delay.
pub const MIN_LENS_HOLD_MS: u64 = 100;

/// Maximum lens hold delay.
pub const MAX_LENS_HOLD_MS: u64 = 2000;

/// Pointer travel (in pixels) that turns a press into a drag.
pub const DEFAULT_DRAG_THRESHOLD_PX: f32 = 3.0;

/// Maximum drag threshold.
pub const MAX_DRAG_THRESHOLD_PX: f32 = 32.0;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Crop applied to the featured image when an item has none.
pub const DEFAULT_CROP: &str = "50% 14%";

/// Featured slot aspect ratio (width / height) used for cover cropping.
pub const FEATURED_ASPECT_RATIO: f32 = 16.0 / 10.0;

/// Opacity of the lightbox image while its source is loading.
pub const LOADING_OPACITY: f32 = 0.5;

/// Thumbnail edge length in logical pixels.
pub const THUMBNAIL_SIZE: f32 = 96.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ZOOM > 0.0);
    assert!(MIN_ZOOM < MAX_ZOOM);
    assert!(MIN_ZOOM_STEP > 0.0);
    assert!(MAX_ZOOM_STEP > MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);

    assert!(MIN_FIT_MARGIN > 0.0);
    assert!(DEFAULT_FIT_MARGIN >= MIN_FIT_MARGIN);
    assert!(DEFAULT_FIT_MARGIN <= MAX_FIT_MARGIN);

    assert!(DEFAULT_DOUBLE_CLICK_MS >= MIN_DOUBLE_CLICK_MS);
    assert!(DEFAULT_DOUBLE_CLICK_MS <= MAX_DOUBLE_CLICK_MS);
    assert!(DEFAULT_LENS_HOLD_MS >= MIN_LENS_HOLD_MS);
    assert!(DEFAULT_LENS_HOLD_MS <= MAX_LENS_HOLD_MS);
    assert!(DEFAULT_DRAG_THRESHOLD_PX >= 0.0);
    assert!(DEFAULT_DRAG_THRESHOLD_PX <= MAX_DRAG_THRESHOLD_PX);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
