// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag panning of the lightbox image. Translation is
//! computed against an anchor taken at press time, so the image never jumps
//! when a drag starts from a previously panned position.

use crate::config::DEFAULT_DRAG_THRESHOLD_PX;
use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pointer position minus the translation at press time.
    anchor: Option<Point>,

    /// Where the pointer went down.
    press_position: Option<Point>,

    /// Whether the pointer travelled beyond the threshold since press.
    has_moved: bool,

    /// Travel (in pixels) separating a click from a drag.
    threshold: f32,
}

impl Default for DragState {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD_PX)
    }
}

impl DragState {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            is_dragging: false,
            anchor: None,
            press_position: None,
            has_moved: false,
            threshold,
        }
    }

    /// Starts a drag from `position` with the image currently at `translate`.
    pub fn start(&mut self, position: Point, translate: Vector) {
        self.is_dragging = true;
        self.anchor = Some(Point::new(position.x - translate.x, position.y - translate.y));
        self.press_position = Some(position);
        self.has_moved = false;
    }

    /// Stops the drag, keeping the click/drag classification readable until
    /// the next [`DragState::start`].
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.anchor = None;
    }

    /// Clears everything, including the classification.
    pub fn reset(&mut self) {
        self.stop();
        self.press_position = None;
        self.has_moved = false;
    }

    /// Translation for the pointer at `current_position`, or `None` when no
    /// drag is active.
    pub fn update(&mut self, current_position: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }
        let anchor = self.anchor?;

        if let Some(press) = self.press_position {
            let dx = current_position.x - press.x;
            let dy = current_position.y - press.y;
            if (dx * dx + dy * dy).sqrt() > self.threshold {
                self.has_moved = true;
            }
        }

        Some(Vector::new(
            current_position.x - anchor.x,
            current_position.y - anchor.y,
        ))
    }

    /// Whether the last press travelled far enough to count as a drag.
    /// A release following a drag must not be treated as a click.
    #[must_use]
    pub fn has_dragged(&self) -> bool {
        self.has_moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging);
        assert!(!state.has_dragged());
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut state = DragState::default();
        assert!(state.update(Point::new(100.0, 50.0)).is_none());
    }

    #[test]
    fn translation_is_relative_to_anchor() {
        let mut state = DragState::default();
        // Image already panned by (30, -10)
        state.start(Point::new(200.0, 150.0), Vector::new(30.0, -10.0));

        // No movement yet: translation unchanged, no jump
        assert_eq!(
            state.update(Point::new(200.0, 150.0)),
            Some(Vector::new(30.0, -10.0))
        );

        // Move by (+20, +5)
        assert_eq!(
            state.update(Point::new(220.0, 155.0)),
            Some(Vector::new(50.0, -5.0))
        );
    }

    #[test]
    fn small_jitter_is_still_a_click() {
        let mut state = DragState::new(3.0);
        state.start(Point::new(10.0, 10.0), Vector::new(0.0, 0.0));
        state.update(Point::new(11.0, 11.0));
        state.stop();

        assert!(!state.has_dragged());
    }

    #[test]
    fn movement_beyond_threshold_is_a_drag() {
        let mut state = DragState::new(3.0);
        state.start(Point::new(10.0, 10.0), Vector::new(0.0, 0.0));
        state.update(Point::new(20.0, 10.0));
        state.stop();

        assert!(state.has_dragged());
        assert!(!state.is_dragging);
    }

    #[test]
    fn reset_clears_classification() {
        let mut state = DragState::new(0.0);
        state.start(Point::new(0.0, 0.0), Vector::new(0.0, 0.0));
        state.update(Point::new(5.0, 0.0));
        state.reset();

        assert!(!state.has_dragged());
    }
}
