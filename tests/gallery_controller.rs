// SPDX-License-Identifier: MPL-2.0
//! Behavior of the gallery controller driven through its public messages.
//!
//! Decoding never runs here: load results are fed back by hand, the way the
//! runtime would deliver them.

use iced::keyboard::{self, Key, Modifiers};
use iced::{event, window, Point, Size};
use iced_gallery::app::persisted_state::StateStore;
use iced_gallery::config::Tuning;
use iced_gallery::diagnostics::UserAction;
use iced_gallery::gallery::{Gallery, GalleryItem, NavigationDirection, ThumbnailAttributes};
use iced_gallery::media::ImageData;
use iced_gallery::ui::gallery::{Effect, Message, State};
use iced_gallery::ui::state::{CursorHint, LightboxMode};
use iced_gallery::ui::widgets::PointerEvent;
use std::path::PathBuf;
use tempfile::tempdir;

const VIEWPORT: Size = Size {
    width: 100.0,
    height: 80.0,
};
const CENTER: Point = Point { x: 50.0, y: 40.0 };
const CORNER: Point = Point { x: 1.0, y: 1.0 };

fn gallery(count: usize) -> Gallery {
    Gallery::new(
        (0..count)
            .map(|i| {
                GalleryItem::from_attributes(ThumbnailAttributes {
                    image: PathBuf::from(format!("thumbs/{i}.jpg")),
                    highres: Some(PathBuf::from(format!("full/{i}.jpg"))),
                    title: Some(format!("Photo {i}")),
                    ..ThumbnailAttributes::default()
                })
            })
            .collect(),
    )
}

fn controller(count: usize) -> State {
    let (mut state, _) = State::new(gallery(count), Tuning::default(), true, VIEWPORT);
    let _ = state.handle_message(Message::FrameTick);
    state
}

fn image(width: u32, height: u32) -> ImageData {
    ImageData::from_rgba(width, height, vec![0; (width * height * 4) as usize])
}

/// Feeds the pending lightbox decode with a `width`×`height` image.
fn finish_lightbox_load(state: &mut State, width: u32, height: u32) {
    let (request, source) = state
        .pending_lightbox_request()
        .map(|(request, source)| (request, source.to_path_buf()))
        .expect("a lightbox load should be pending");
    let _ = state.handle_message(Message::LightboxLoaded {
        request,
        source,
        result: Ok(image(width, height)),
    });
    let _ = state.handle_message(Message::FrameTick);
}

/// Opens the lightbox on item 0 with a 200×100 image: fit is 0.45.
fn open_loaded(state: &mut State) {
    let _ = state.open_lightbox(PathBuf::from("full/0.jpg"));
    finish_lightbox_load(state, 200, 100);
}

fn pointer(state: &mut State, event: PointerEvent) -> Effect {
    state.handle_message(Message::Pointer(event)).0
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

fn modifiers(state: &mut State, modifiers: Modifiers) {
    let _ = state.handle_message(Message::RawEvent {
        window: window::Id::unique(),
        event: event::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)),
    });
    let _ = state.handle_message(Message::FrameTick);
}

#[test]
fn navigation_wraps_in_both_directions() {
    let mut state = controller(5);

    let _ = state.navigate(NavigationDirection::Previous);
    assert_eq!(state.gallery().active_index(), Some(4));

    let _ = state.navigate(NavigationDirection::Next);
    assert_eq!(state.gallery().active_index(), Some(0));
}

#[test]
fn navigate_moves_the_highlight_on_the_next_frame() {
    let mut state = controller(5);
    let (effect, _) = state.handle_message(Message::Navigate(NavigationDirection::Previous));
    assert_eq!(effect, Effect::Action(UserAction::NavigatePrevious));

    assert_eq!(state.presentation().active_thumbnail, Some(0));
    let _ = state.handle_message(Message::FrameTick);
    assert_eq!(state.presentation().active_thumbnail, Some(4));
}

#[test]
fn zoom_requests_are_clamped() {
    let mut state = controller(1);
    open_loaded(&mut state);

    assert!(approx(state.set_zoom(5.0).value(), 1.0));
    assert_eq!(state.mode(), LightboxMode::FullView);

    assert!(approx(state.set_zoom(0.01).value(), 0.1));
    assert_eq!(state.mode(), LightboxMode::FitView);
}

#[test]
fn fit_zoom_matches_the_viewport_formula() {
    let mut state = controller(1);
    open_loaded(&mut state);

    // min(0.9 * 80 / 100, 0.9 * 100 / 200)
    assert!(approx(state.zoom().fit.value(), 0.45));
    assert!(approx(state.presentation().zoom.value(), 0.45));
    assert_eq!(state.mode(), LightboxMode::FitView);
}

#[test]
fn two_toggles_return_to_the_exact_fit() {
    let mut state = controller(1);
    open_loaded(&mut state);
    let fit = state.zoom().fit;

    state.toggle_full_zoom();
    assert_eq!(state.mode(), LightboxMode::FullView);
    assert!(state.zoom().level.is_full());

    state.toggle_full_zoom();
    assert_eq!(state.zoom().level, fit);
    assert_eq!(state.mode(), LightboxMode::FitView);
}

#[test]
fn toggle_from_a_stepped_level_goes_full_then_back_to_fit() {
    let mut state = controller(1);
    open_loaded(&mut state);
    let fit = state.zoom().fit;

    let _ = state.handle_key(&Key::Character("+".into()));
    assert!(approx(state.zoom().level.value(), 0.55));

    state.toggle_full_zoom();
    assert!(state.zoom().level.is_full());
    state.toggle_full_zoom();
    assert_eq!(state.zoom().level, fit);
}

#[test]
fn zoom_out_key_never_goes_below_fit() {
    let mut state = controller(1);
    open_loaded(&mut state);

    let (effect, _) = state.handle_key(&Key::Character("-".into()));
    assert_eq!(effect, Effect::Action(UserAction::ZoomOut));
    assert_eq!(state.zoom().level, state.zoom().fit);
}

#[test]
fn closing_resets_pan_and_hides_the_footer() {
    let mut state = controller(1);
    open_loaded(&mut state);
    state.toggle_full_zoom();
    let _ = state.handle_message(Message::FrameTick);

    pointer(&mut state, PointerEvent::Pressed(CENTER));
    pointer(&mut state, PointerEvent::Moved(Point::new(70.0, 50.0)));
    let _ = state.handle_message(Message::FrameTick);
    assert_ne!(state.presentation().translate, iced::Vector::ZERO);

    assert!(state.close_lightbox());
    let _ = state.handle_message(Message::FrameTick);

    let presentation = state.presentation();
    assert_eq!(presentation.translate, iced::Vector::ZERO);
    assert!(!presentation.footer_visible);
    assert!(!presentation.lightbox_visible);
    assert!(!presentation.scroll_locked);
    assert_eq!(state.mode(), LightboxMode::Closed);
}

#[test]
fn close_when_closed_is_a_no_op() {
    let mut state = controller(1);
    assert!(!state.close_lightbox());
    assert!(!state.has_pending_frame());
}

#[test]
fn double_click_cancels_the_single_click_and_opens_high_res() {
    let mut state = controller(3);

    let (effect, _) = state.handle_message(Message::ThumbnailClicked(2));
    assert_eq!(effect, Effect::None);
    let (_, token) = state.pending_click().expect("single click scheduled");

    let (effect, _) = state.handle_message(Message::ThumbnailClicked(2));
    assert_eq!(effect, Effect::Action(UserAction::OpenLightbox { index: 2 }));
    assert!(state.pending_click().is_none());
    assert_eq!(
        state.pending_lightbox_request().map(|(_, source)| source.to_path_buf()),
        Some(PathBuf::from("full/2.jpg"))
    );

    // The cancelled single click never selects
    let (effect, _) = state.handle_message(Message::ClickTimerElapsed(token));
    assert_eq!(effect, Effect::None);
}

#[test]
fn single_click_selects_after_the_debounce() {
    let mut state = controller(3);
    let _ = state.handle_message(Message::ThumbnailClicked(1));
    let (_, token) = state.pending_click().expect("single click scheduled");

    let (effect, _) = state.handle_message(Message::ClickTimerElapsed(token));
    assert_eq!(effect, Effect::Action(UserAction::SelectItem { index: 1 }));
    assert_eq!(state.mode(), LightboxMode::Closed);
}

#[test]
fn stale_timer_token_never_fires() {
    let mut state = controller(3);
    let _ = state.handle_message(Message::ThumbnailClicked(1));
    let (_, stale) = state.pending_click().expect("first click scheduled");

    // Another thumbnail supersedes the pending click
    let _ = state.handle_message(Message::ThumbnailClicked(2));
    let request = state.pending_featured_request();

    let (effect, _) = state.handle_message(Message::ClickTimerElapsed(stale));
    assert_eq!(effect, Effect::None);
    assert_eq!(state.pending_featured_request(), request);
}

#[test]
fn lens_release_returns_exactly_to_fit() {
    let mut state = controller(1);
    open_loaded(&mut state);
    let fit = state.zoom().fit;

    pointer(&mut state, PointerEvent::Pressed(CENTER));
    let token = state.pending_hold().expect("hold scheduled at fit zoom");
    let (effect, _) = state.handle_message(Message::LensHoldElapsed(token));
    assert_eq!(effect, Effect::Action(UserAction::LensZoom));
    assert!(state.mode().is_lens());
    assert!(state.zoom().level.is_full());

    let effect = pointer(&mut state, PointerEvent::Released(CENTER));
    assert_eq!(effect, Effect::None);
    assert_eq!(state.mode(), LightboxMode::FitView);
    assert_eq!(state.zoom().level, fit);
}

#[test]
fn toggling_during_the_lens_keeps_full_after_release() {
    let mut state = controller(1);
    open_loaded(&mut state);

    pointer(&mut state, PointerEvent::Pressed(CENTER));
    let token = state.pending_hold().expect("hold scheduled");
    let _ = state.handle_message(Message::LensHoldElapsed(token));

    let (effect, _) = state.handle_key(&Key::Character("1".into()));
    assert_eq!(effect, Effect::Action(UserAction::ToggleZoom));
    pointer(&mut state, PointerEvent::Released(CENTER));

    assert_eq!(state.mode(), LightboxMode::FullView);
    assert!(state.zoom().level.is_full());
}

#[test]
fn leaving_the_window_ends_the_lens() {
    let mut state = controller(1);
    open_loaded(&mut state);

    pointer(&mut state, PointerEvent::Pressed(CENTER));
    let token = state.pending_hold().expect("hold scheduled");
    let _ = state.handle_message(Message::LensHoldElapsed(token));
    pointer(&mut state, PointerEvent::Left);

    assert_eq!(state.mode(), LightboxMode::FitView);
}

#[test]
fn drag_cannot_start_over_a_pending_zoom_reset() {
    let mut state = controller(1);
    open_loaded(&mut state);
    state.toggle_full_zoom();
    assert!(state.has_pending_frame());

    pointer(&mut state, PointerEvent::Pressed(CENTER));
    pointer(&mut state, PointerEvent::Moved(Point::new(70.0, 50.0)));
    assert_eq!(state.translate(), iced::Vector::ZERO);
    pointer(&mut state, PointerEvent::Left);
    assert_eq!(state.mode(), LightboxMode::FullView);

    let _ = state.handle_message(Message::FrameTick);
    pointer(&mut state, PointerEvent::Pressed(CENTER));
    pointer(&mut state, PointerEvent::Moved(Point::new(70.0, 50.0)));
    assert_eq!(state.translate(), iced::Vector::new(20.0, 10.0));
}

#[test]
fn drag_release_does_not_toggle_zoom() {
    let mut state = controller(1);
    open_loaded(&mut state);
    state.toggle_full_zoom();
    let _ = state.handle_message(Message::FrameTick);

    pointer(&mut state, PointerEvent::Pressed(CENTER));
    pointer(&mut state, PointerEvent::Moved(Point::new(70.0, 50.0)));
    let effect = pointer(&mut state, PointerEvent::Released(Point::new(70.0, 50.0)));

    assert_eq!(effect, Effect::None);
    assert_eq!(state.mode(), LightboxMode::FullView);
}

#[test]
fn backdrop_click_closes_but_image_click_does_not() {
    let mut state = controller(1);
    open_loaded(&mut state);

    pointer(&mut state, PointerEvent::Pressed(CENTER));
    let effect = pointer(&mut state, PointerEvent::Released(CENTER));
    assert_eq!(effect, Effect::Action(UserAction::ToggleZoom));
    assert!(state.mode().is_open());

    state.toggle_full_zoom();
    let _ = state.handle_message(Message::FrameTick);
    // At 45% the 90×45 image leaves the corner uncovered
    pointer(&mut state, PointerEvent::Pressed(CORNER));
    let effect = pointer(&mut state, PointerEvent::Released(CORNER));
    assert_eq!(effect, Effect::Action(UserAction::CloseLightbox));
    assert_eq!(state.mode(), LightboxMode::Closed);
}

#[test]
fn reopening_the_loaded_source_shows_no_loading_cue() {
    let mut state = controller(1);
    open_loaded(&mut state);
    state.close_lightbox();
    let _ = state.handle_message(Message::FrameTick);

    let _ = state.open_lightbox(PathBuf::from("full/0.jpg"));
    assert!(state.pending_lightbox_request().is_none());
    let _ = state.handle_message(Message::FrameTick);

    let presentation = state.presentation();
    assert_eq!(presentation.lightbox_opacity, 1.0);
    assert!(presentation.lightbox_image.is_some());
    assert!(approx(presentation.zoom.value(), 0.45));
}

#[test]
fn opening_another_source_dims_until_loaded() {
    let mut state = controller(2);
    open_loaded(&mut state);
    state.close_lightbox();

    let _ = state.open_lightbox(PathBuf::from("full/1.jpg"));
    let _ = state.handle_message(Message::FrameTick);
    assert!(state.presentation().lightbox_opacity < 1.0);
    assert!(state.presentation().lightbox_image.is_none());

    finish_lightbox_load(&mut state, 200, 100);
    assert_eq!(state.presentation().lightbox_opacity, 1.0);
}

#[test]
fn controls_toggle_is_persisted_across_sessions() {
    let dir = tempdir().expect("temp dir");
    let store = StateStore::new(Some(dir.path().to_path_buf()));

    let (app_state, warning) = store.load();
    assert!(warning.is_none());
    assert!(app_state.controls_visible);

    let mut state = controller(1);
    open_loaded(&mut state);
    let (effect, _) = state.handle_key(&Key::Character("h".into()));
    assert_eq!(effect, Effect::PersistControls(false));

    let mut saved = app_state.clone();
    saved.controls_visible = state.controls_visible();
    assert!(store.save(&saved).is_none());

    let (reloaded, _) = store.load();
    let (restored, _) = State::new(
        gallery(1),
        Tuning::default(),
        reloaded.controls_visible,
        VIEWPORT,
    );
    assert!(!restored.controls_visible());
}

#[test]
fn hidden_controls_keep_the_footer_hidden_on_open() {
    let (mut state, _) = State::new(gallery(1), Tuning::default(), false, VIEWPORT);
    open_loaded(&mut state);
    assert!(!state.presentation().footer_visible);
    assert!(state.presentation().lightbox_visible);
}

#[test]
fn zoom_keys_wait_for_the_decoded_image() {
    for key in ["1", "+", "-"] {
        let mut state = controller(1);
        let _ = state.open_lightbox(PathBuf::from("full/0.jpg"));

        let (effect, _) = state.handle_key(&Key::Character(key.into()));
        assert_eq!(effect, Effect::None, "key {key} before decode");
        assert_eq!(state.mode(), LightboxMode::FitView);

        finish_lightbox_load(&mut state, 200, 100);
        assert_eq!(state.mode(), LightboxMode::FitView);
        assert!(approx(state.presentation().zoom.value(), 0.45));

        let (effect, _) = state.handle_key(&Key::Character("1".into()));
        assert_eq!(effect, Effect::Action(UserAction::ToggleZoom));
        assert_eq!(state.mode(), LightboxMode::FullView);
        assert!(state.zoom().level.is_full());
    }
}

#[test]
fn zoom_requested_before_decode_yields_to_the_fit() {
    let mut state = controller(1);
    let _ = state.open_lightbox(PathBuf::from("full/0.jpg"));
    let _ = state.set_zoom(1.0);
    assert_eq!(state.mode(), LightboxMode::FullView);

    finish_lightbox_load(&mut state, 200, 100);
    assert_eq!(state.mode(), LightboxMode::FitView);
    assert_eq!(state.zoom().level, state.zoom().fit);

    // Fitted, so no pan
    pointer(&mut state, PointerEvent::Pressed(CENTER));
    pointer(&mut state, PointerEvent::Moved(Point::new(70.0, 50.0)));
    assert_eq!(state.translate(), iced::Vector::ZERO);
    pointer(&mut state, PointerEvent::Left);

    state.toggle_full_zoom();
    assert_eq!(state.mode(), LightboxMode::FullView);
    assert!(state.zoom().level.is_full());
}

#[test]
fn shift_shows_zoom_out_at_any_level() {
    let mut state = controller(1);
    open_loaded(&mut state);
    assert_eq!(state.presentation().cursor, CursorHint::ZoomIn);

    modifiers(&mut state, Modifiers::SHIFT);
    assert_eq!(state.presentation().cursor, CursorHint::ZoomOut);
    modifiers(&mut state, Modifiers::empty());
    assert_eq!(state.presentation().cursor, CursorHint::ZoomIn);

    state.toggle_full_zoom();
    let _ = state.handle_message(Message::FrameTick);
    modifiers(&mut state, Modifiers::SHIFT);
    assert_eq!(state.presentation().cursor, CursorHint::ZoomOut);
}

#[test]
fn lens_after_stepping_keeps_the_pointed_pixel() {
    let mut state = controller(1);
    open_loaded(&mut state);
    let _ = state.handle_key(&Key::Character("+".into()));
    let _ = state.handle_message(Message::FrameTick);
    assert_eq!(state.mode(), LightboxMode::FitView);

    // At 55% the 110×55 image starts at x = -5
    let press = Point::new(30.0, 40.0);
    let pixel_x = (press.x + 5.0) / 0.55;

    pointer(&mut state, PointerEvent::Pressed(press));
    let token = state.pending_hold().expect("hold scheduled below natural size");
    let _ = state.handle_message(Message::LensHoldElapsed(token));
    assert!(state.mode().is_lens());

    // At natural size the 200px image starts at x = -50, then is shifted
    let left = -50.0 + state.translate().x;
    assert!((press.x - left - pixel_x).abs() < 1e-3);
}
