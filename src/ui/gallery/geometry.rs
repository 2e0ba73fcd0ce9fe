// SPDX-License-Identifier: MPL-2.0
//! Lightbox geometry in window coordinates.
//!
//! The lightbox covers the whole window. The image is centered, scaled by
//! the zoom level, then shifted by the pan translation.

use crate::ui::state::ZoomLevel;
use iced::{Point, Rectangle, Size, Vector};

/// Rectangle occupied by an image of `displayed` size in `viewport`.
#[must_use]
pub fn image_rect(viewport: Size, displayed: Size, translate: Vector) -> Rectangle {
    Rectangle {
        x: (viewport.width - displayed.width) / 2.0 + translate.x,
        y: (viewport.height - displayed.height) / 2.0 + translate.y,
        width: displayed.width,
        height: displayed.height,
    }
}

/// Whether `point` lies on the image.
#[must_use]
pub fn hits_image(viewport: Size, displayed: Size, translate: Vector, point: Point) -> bool {
    image_rect(viewport, displayed, translate).contains(point)
}

/// Translation that puts the lens under the pointer.
///
/// The pointer's position over the image as it was `shown` before the lens
/// picks a point of the picture; at natural size that same point is moved
/// under the pointer.
#[must_use]
pub fn lens_translate(viewport: Size, natural: Size, shown: ZoomLevel, pointer: Point) -> Vector {
    let before = image_rect(viewport, shown.scaled(natural), Vector::new(0.0, 0.0));
    if before.width <= 0.0 || before.height <= 0.0 {
        return Vector::new(0.0, 0.0);
    }

    let u = ((pointer.x - before.x) / before.width).clamp(0.0, 1.0);
    let v = ((pointer.y - before.y) / before.height).clamp(0.0, 1.0);

    let full = image_rect(viewport, natural, Vector::new(0.0, 0.0));
    Vector::new(
        pointer.x - (full.x + u * natural.width),
        pointer.y - (full.y + v * natural.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const VIEWPORT: Size = Size {
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn image_is_centered_without_translation() {
        let rect = image_rect(VIEWPORT, Size::new(400.0, 200.0), Vector::new(0.0, 0.0));
        assert_eq!(rect, Rectangle::new(Point::new(300.0, 300.0), Size::new(400.0, 200.0)));
    }

    #[test]
    fn translation_shifts_the_image() {
        let rect = image_rect(VIEWPORT, Size::new(400.0, 200.0), Vector::new(-50.0, 20.0));
        assert_eq!(rect.x, 250.0);
        assert_eq!(rect.y, 320.0);
    }

    #[test]
    fn oversized_image_extends_past_the_window() {
        let rect = image_rect(VIEWPORT, Size::new(2000.0, 1000.0), Vector::new(0.0, 0.0));
        assert_eq!(rect.x, -500.0);
        assert_eq!(rect.y, -100.0);
    }

    #[test]
    fn backdrop_is_not_the_image() {
        let displayed = Size::new(400.0, 200.0);
        let none = Vector::new(0.0, 0.0);
        assert!(hits_image(VIEWPORT, displayed, none, Point::new(500.0, 400.0)));
        assert!(!hits_image(VIEWPORT, displayed, none, Point::new(10.0, 10.0)));
    }

    #[test]
    fn lens_at_center_keeps_image_centered() {
        let natural = Size::new(2000.0, 1000.0);
        let translate = lens_translate(VIEWPORT, natural, ZoomLevel::new(0.45), Point::new(500.0, 400.0));
        assert_abs_diff_eq!(translate.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(translate.y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn lens_keeps_the_pointed_pixel_under_the_pointer() {
        let natural = Size::new(2000.0, 1000.0);
        let fit = ZoomLevel::new(0.45);
        // Fitted image spans x 50..950; pointer at its left quarter
        let pointer = Point::new(275.0, 400.0);

        let translate = lens_translate(VIEWPORT, natural, fit, pointer);
        let full = image_rect(VIEWPORT, natural, translate);

        // Image pixel 500 (a quarter of 2000) sits under the pointer
        assert_abs_diff_eq!(full.x + 500.0, pointer.x, epsilon = 1e-3);
    }
}
