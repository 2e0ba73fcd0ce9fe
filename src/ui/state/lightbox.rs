// SPDX-License-Identifier: MPL-2.0
//! Lightbox mode state machine.
//!
//! The lightbox is always in exactly one [`LightboxMode`]. Whether the image
//! is at natural size is read from the mode, never from comparing the zoom
//! level against `1.0`.

/// Display mode of the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxMode {
    /// Overlay hidden.
    #[default]
    Closed,
    /// Scaled below natural size: the fit level, or a level reached with the
    /// zoom keys.
    FitView,
    /// Natural size, entered on purpose (toggle or zoom keys).
    FullView,
    /// Natural size while the pointer is held (lens). Releasing returns to
    /// `return_to`.
    TemporaryFullView { return_to: ReturnMode },
}

/// Mode a temporary lens returns to on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnMode {
    FitView,
}

/// Inputs of the lightbox state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxEvent {
    Open,
    Close,
    ToggleFull,
    /// A zoom level was applied; `full` tells whether it is natural size.
    ZoomTo { full: bool },
    LensStart,
    LensEnd,
}

impl LightboxMode {
    /// Transition table.
    ///
    /// | From \ Event      | Open    | Close  | ToggleFull | ZoomTo(<1) | ZoomTo(=1) | LensStart | LensEnd |
    /// |-------------------|---------|--------|------------|------------|------------|-----------|---------|
    /// | Closed            | FitView | Closed | Closed     | Closed     | Closed     | Closed    | Closed  |
    /// | FitView           | FitView | Closed | FullView   | FitView    | FullView   | Temporary | FitView |
    /// | FullView          | FitView | Closed | FitView    | FitView    | FullView   | FullView  | FullView|
    /// | TemporaryFullView | FitView | Closed | FullView   | FitView    | FullView   | Temporary | FitView |
    #[must_use]
    pub fn transition(self, event: LightboxEvent) -> Self {
        use LightboxEvent as E;
        use LightboxMode as M;

        match (self, event) {
            (_, E::Close) => M::Closed,
            (_, E::Open) => M::FitView,
            (M::Closed, _) => M::Closed,

            (M::FitView, E::ToggleFull) => M::FullView,
            (M::FullView, E::ToggleFull) => M::FitView,
            // Toggling during a lens makes the natural size permanent.
            (M::TemporaryFullView { .. }, E::ToggleFull) => M::FullView,

            (_, E::ZoomTo { full: true }) => M::FullView,
            (_, E::ZoomTo { full: false }) => M::FitView,

            (M::FitView, E::LensStart) => M::TemporaryFullView {
                return_to: ReturnMode::FitView,
            },
            (mode, E::LensStart) => mode,

            (
                M::TemporaryFullView {
                    return_to: ReturnMode::FitView,
                },
                E::LensEnd,
            ) => M::FitView,
            (mode, E::LensEnd) => mode,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self != LightboxMode::Closed
    }

    /// Whether the image is displayed at natural size for any reason.
    #[must_use]
    pub fn is_full(self) -> bool {
        matches!(
            self,
            LightboxMode::FullView | LightboxMode::TemporaryFullView { .. }
        )
    }

    /// Whether natural size was chosen permanently (drag-to-pan allowed).
    #[must_use]
    pub fn is_permanent_full(self) -> bool {
        self == LightboxMode::FullView
    }

    #[must_use]
    pub fn is_lens(self) -> bool {
        matches!(self, LightboxMode::TemporaryFullView { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MODES: [LightboxMode; 4] = [
        LightboxMode::Closed,
        LightboxMode::FitView,
        LightboxMode::FullView,
        LightboxMode::TemporaryFullView {
            return_to: ReturnMode::FitView,
        },
    ];

    #[test]
    fn close_always_closes() {
        for mode in ALL_MODES {
            assert_eq!(mode.transition(LightboxEvent::Close), LightboxMode::Closed);
        }
    }

    #[test]
    fn open_always_starts_fitted() {
        for mode in ALL_MODES {
            assert_eq!(mode.transition(LightboxEvent::Open), LightboxMode::FitView);
        }
    }

    #[test]
    fn closed_ignores_zoom_events() {
        for event in [
            LightboxEvent::ToggleFull,
            LightboxEvent::ZoomTo { full: true },
            LightboxEvent::LensStart,
            LightboxEvent::LensEnd,
        ] {
            assert_eq!(LightboxMode::Closed.transition(event), LightboxMode::Closed);
        }
    }

    #[test]
    fn toggle_alternates_fit_and_full() {
        let mode = LightboxMode::FitView.transition(LightboxEvent::ToggleFull);
        assert_eq!(mode, LightboxMode::FullView);
        assert_eq!(
            mode.transition(LightboxEvent::ToggleFull),
            LightboxMode::FitView
        );
    }

    #[test]
    fn lens_returns_to_fit_on_release() {
        let lens = LightboxMode::FitView.transition(LightboxEvent::LensStart);
        assert!(lens.is_lens());
        assert!(lens.is_full());
        assert!(!lens.is_permanent_full());
        assert_eq!(lens.transition(LightboxEvent::LensEnd), LightboxMode::FitView);
    }

    #[test]
    fn toggle_during_lens_keeps_full_after_release() {
        let mode = LightboxMode::FitView
            .transition(LightboxEvent::LensStart)
            .transition(LightboxEvent::ToggleFull)
            .transition(LightboxEvent::LensEnd);
        assert_eq!(mode, LightboxMode::FullView);
    }

    #[test]
    fn lens_does_not_start_at_full_view() {
        assert_eq!(
            LightboxMode::FullView.transition(LightboxEvent::LensStart),
            LightboxMode::FullView
        );
    }

    #[test]
    fn zoom_to_natural_size_enters_full_view() {
        assert_eq!(
            LightboxMode::FitView.transition(LightboxEvent::ZoomTo { full: true }),
            LightboxMode::FullView
        );
        assert_eq!(
            LightboxMode::FullView.transition(LightboxEvent::ZoomTo { full: false }),
            LightboxMode::FitView
        );
    }
}
