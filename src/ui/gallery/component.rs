// SPDX-License-Identifier: MPL-2.0
//! Gallery controller encapsulating state and update logic.
//!
//! Handlers read the logical state, then enqueue visual writes into the
//! pending [`FrameBatch`]. The view only ever renders the [`Presentation`],
//! which changes when the batch is applied on the next frame tick.

use crate::config::{Tuning, FEATURED_ASPECT_RATIO};
use crate::diagnostics::UserAction;
use crate::error::ImageLoadError;
use crate::gallery::{Gallery, NavigationDirection};
use crate::media::image::{load_featured_async, load_image_async};
use crate::media::{ImageCache, ImageData};
use crate::ui::gallery::geometry;
use crate::ui::state::{
    timer, ClickDisambiguator, ClickOutcome, CursorHint, DragState, FeaturedView, FrameBatch,
    LightboxEvent, LightboxImage, LightboxMode, Presentation, ScheduledTask, TimerToken,
    ZoomLevel, ZoomState,
};
use crate::ui::widgets::PointerEvent;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Point, Size, Subscription, Task, Vector};
use std::path::{Path, PathBuf};

/// Messages emitted by the gallery views and its background tasks.
#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailClicked(usize),
    ThumbnailHovered(usize),
    FeaturedClicked,
    Navigate(NavigationDirection),
    CloseClicked,
    Pointer(PointerEvent),
    ClickTimerElapsed(TimerToken),
    LensHoldElapsed(TimerToken),
    FeaturedLoaded {
        request: u64,
        index: usize,
        result: Result<ImageData, ImageLoadError>,
    },
    LightboxLoaded {
        request: u64,
        source: PathBuf,
        result: Result<ImageData, ImageLoadError>,
    },
    Preloaded {
        source: PathBuf,
        result: Result<ImageData, ImageLoadError>,
    },
    FrameTick,
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Side effects the application should perform after a gallery message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The footer preference changed and must be written to disk.
    PersistControls(bool),
    /// A featured or lightbox image could not be decoded.
    ReportLoadFailure(ImageLoadError),
    /// A user action worth recording.
    Action(UserAction),
}

/// What the pointer went down on in the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressTarget {
    Image,
    Backdrop,
}

pub struct State {
    gallery: Gallery,
    tuning: Tuning,
    zoom: ZoomState,
    mode: LightboxMode,
    drag: DragState,
    hold: ScheduledTask,
    clicks: ClickDisambiguator,
    cache: ImageCache,
    presentation: Presentation,
    frame: FrameBatch,
    /// Pan of the lightbox image as last requested.
    translate: Vector,
    controls_visible: bool,
    shift_held: bool,
    viewport: Size,
    cursor_position: Option<Point>,
    press: Option<PressTarget>,
    /// The current press engaged the lens, so its release is not a click.
    lens_engaged: bool,
    /// Level shown when the lens engaged; the pointer is mapped through it.
    lens_origin: ZoomLevel,
    next_request: u64,
    featured_request: Option<u64>,
    lightbox_request: Option<(u64, PathBuf)>,
    /// Image currently loaded into the lightbox.
    lightbox: Option<LightboxImage>,
}

impl State {
    /// Builds the controller and starts featuring the active item.
    pub fn new(
        gallery: Gallery,
        tuning: Tuning,
        controls_visible: bool,
        viewport: Size,
    ) -> (Self, Task<Message>) {
        let mut state = Self {
            gallery,
            tuning,
            zoom: ZoomState::new(tuning.zoom_step, tuning.fit_margin),
            mode: LightboxMode::Closed,
            drag: DragState::new(tuning.drag_threshold_px),
            hold: ScheduledTask::new(),
            clicks: ClickDisambiguator::new(),
            cache: ImageCache::default(),
            presentation: Presentation::default(),
            frame: FrameBatch::new(),
            translate: Vector::ZERO,
            controls_visible,
            shift_held: false,
            viewport,
            cursor_position: None,
            press: None,
            lens_engaged: false,
            lens_origin: ZoomLevel::FULL,
            next_request: 0,
            featured_request: None,
            lightbox_request: None,
            lightbox: None,
        };

        let task = match state.gallery.active_index() {
            Some(active) => {
                state.frame.highlight_thumbnail(Some(active));
                state.select_item(active)
            }
            None => Task::none(),
        };
        (state, task)
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    #[must_use]
    pub fn mode(&self) -> LightboxMode {
        self.mode
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    #[must_use]
    pub fn translate(&self) -> Vector {
        self.translate
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Whether visual writes are waiting for the next frame.
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        !self.frame.is_empty()
    }

    /// Item and token of a single click still waiting for its debounce.
    #[must_use]
    pub fn pending_click(&self) -> Option<(usize, TimerToken)> {
        self.clicks.pending()
    }

    #[must_use]
    pub fn pending_hold(&self) -> Option<TimerToken> {
        self.hold.pending_token()
    }

    #[must_use]
    pub fn pending_featured_request(&self) -> Option<u64> {
        self.featured_request
    }

    #[must_use]
    pub fn pending_lightbox_request(&self) -> Option<(u64, &Path)> {
        self.lightbox_request
            .as_ref()
            .map(|(request, source)| (*request, source.as_path()))
    }

    /// Frame ticks are only needed while a batch is pending.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.frame.is_empty() {
            Subscription::none()
        } else {
            window::frames().map(|_| Message::FrameTick)
        }
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::ThumbnailClicked(index) => self.handle_thumbnail_click(index),
            Message::ThumbnailHovered(index) => (Effect::None, self.preload(index)),
            Message::FeaturedClicked => match self.gallery.active_item() {
                Some(item) if !self.mode.is_open() => {
                    let source = item.high_res_src.clone();
                    let index = self.gallery.active_index().unwrap_or_default();
                    let task = self.open_lightbox(source);
                    (Effect::Action(UserAction::OpenLightbox { index }), task)
                }
                _ => (Effect::None, Task::none()),
            },
            Message::Navigate(direction) => self.handle_navigate(direction),
            Message::CloseClicked => (self.close_effect(), Task::none()),
            Message::Pointer(event) => self.handle_pointer(event),
            Message::ClickTimerElapsed(token) => match self.clicks.timer_fired(token) {
                Some(index) => (
                    Effect::Action(UserAction::SelectItem { index }),
                    self.select_item(index),
                ),
                None => (Effect::None, Task::none()),
            },
            Message::LensHoldElapsed(token) => (self.handle_hold_elapsed(token), Task::none()),
            Message::FeaturedLoaded {
                request,
                index,
                result,
            } => (self.handle_featured_loaded(request, index, result), Task::none()),
            Message::LightboxLoaded {
                request,
                source,
                result,
            } => (
                self.handle_lightbox_loaded(request, source, result),
                Task::none(),
            ),
            Message::Preloaded { source, result } => {
                match result {
                    Ok(image) => {
                        self.cache.insert(source, image);
                    }
                    Err(_) => self.cache.abandon_preload(&source),
                }
                (Effect::None, Task::none())
            }
            Message::FrameTick => {
                self.frame.apply(&mut self.presentation);
                (Effect::None, Task::none())
            }
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
        }
    }

    // =========================================================================
    // Featured slot
    // =========================================================================

    /// Decodes the item at `index` for the featured slot. The slot is dimmed
    /// until the result arrives; a later request supersedes this one.
    pub fn select_item(&mut self, index: usize) -> Task<Message> {
        let Some(item) = self.gallery.get(index) else {
            return Task::none();
        };
        let path = item.image_src.clone();
        let crop = item.crop_position;

        let request = self.issue_request();
        self.featured_request = Some(request);
        self.frame.dim_featured();

        Task::perform(
            load_featured_async(path, crop, FEATURED_ASPECT_RATIO),
            move |result| Message::FeaturedLoaded {
                request,
                index,
                result,
            },
        )
    }

    fn handle_featured_loaded(
        &mut self,
        request: u64,
        index: usize,
        result: Result<ImageData, ImageLoadError>,
    ) -> Effect {
        if self.featured_request != Some(request) {
            return Effect::None;
        }
        self.featured_request = None;

        match result {
            Ok(image) => {
                let Some(item) = self.gallery.get(index) else {
                    self.frame.restore_featured_opacity();
                    return Effect::None;
                };
                let caption = item.title.clone();
                let source = item.image_src.clone();

                self.frame.show_featured(FeaturedView {
                    index,
                    image,
                    caption,
                });
                // No thumbnail for the source: keep the prior highlight.
                if let Some(thumbnail) = self.gallery.index_of_source(&source) {
                    self.gallery.set_active(thumbnail);
                    self.frame.highlight_thumbnail(Some(thumbnail));
                }
                Effect::None
            }
            Err(error) => {
                self.frame.restore_featured_opacity();
                Effect::ReportLoadFailure(error)
            }
        }
    }

    /// Moves one item with wraparound. Inactive while the lightbox is open.
    pub fn navigate(&mut self, direction: NavigationDirection) -> Task<Message> {
        if self.mode.is_open() {
            return Task::none();
        }
        let Some(next) = self.gallery.navigate(direction) else {
            return Task::none();
        };
        self.clicks.cancel();
        self.frame.highlight_thumbnail(Some(next));
        self.select_item(next)
    }

    fn handle_navigate(&mut self, direction: NavigationDirection) -> (Effect, Task<Message>) {
        if self.mode.is_open() || self.gallery.is_empty() {
            return (Effect::None, Task::none());
        }
        let action = match direction {
            NavigationDirection::Next => UserAction::NavigateNext,
            NavigationDirection::Previous => UserAction::NavigatePrevious,
        };
        (Effect::Action(action), self.navigate(direction))
    }

    fn handle_thumbnail_click(&mut self, index: usize) -> (Effect, Task<Message>) {
        if index >= self.gallery.len() {
            return (Effect::None, Task::none());
        }

        match self.clicks.register_click(index) {
            ClickOutcome::Schedule(token) => (
                Effect::None,
                timer::sleep(self.tuning.double_click, token, Message::ClickTimerElapsed),
            ),
            ClickOutcome::DoubleClick(index) => {
                let Some(source) = self.gallery.get(index).map(|i| i.high_res_src.clone()) else {
                    return (Effect::None, Task::none());
                };
                self.gallery.set_active(index);
                self.frame.highlight_thumbnail(Some(index));
                let task = self.open_lightbox(source);
                (Effect::Action(UserAction::OpenLightbox { index }), task)
            }
        }
    }

    /// Warms the cache with the high-resolution source of a hovered thumbnail.
    fn preload(&mut self, index: usize) -> Task<Message> {
        let Some(source) = self.gallery.get(index).map(|i| i.high_res_src.clone()) else {
            return Task::none();
        };
        if !self.cache.begin_preload(&source) {
            return Task::none();
        }
        let target = source.clone();
        Task::perform(load_image_async(source), move |result| Message::Preloaded {
            source: target.clone(),
            result,
        })
    }

    // =========================================================================
    // Lightbox
    // =========================================================================

    /// Shows the overlay on `source`. Opening again on the source that is
    /// already loaded reuses it without a loading cue.
    pub fn open_lightbox(&mut self, source: PathBuf) -> Task<Message> {
        self.mode = self.mode.transition(LightboxEvent::Open);
        self.hold.cancel();
        self.drag.reset();
        self.press = None;
        self.lens_engaged = false;
        self.translate = Vector::ZERO;

        self.frame.set_lightbox_visible(true);
        self.frame.set_footer_visible(self.controls_visible);

        if self
            .lightbox
            .as_ref()
            .is_some_and(|loaded| loaded.source == source)
        {
            self.lightbox_request = None;
            self.frame.restore_lightbox_opacity();
            self.apply_fit_to_loaded();
            return Task::none();
        }

        if let Some(image) = self.cache.get(&source) {
            self.lightbox_request = None;
            self.show_lightbox_image(source, image);
            return Task::none();
        }

        self.lightbox = None;
        self.frame.set_lightbox_image(None);
        self.frame.dim_lightbox();

        let request = self.issue_request();
        self.lightbox_request = Some((request, source.clone()));
        let target = source.clone();
        Task::perform(load_image_async(source), move |result| {
            Message::LightboxLoaded {
                request,
                source: target.clone(),
                result,
            }
        })
    }

    fn handle_lightbox_loaded(
        &mut self,
        request: u64,
        source: PathBuf,
        result: Result<ImageData, ImageLoadError>,
    ) -> Effect {
        let current = self
            .lightbox_request
            .as_ref()
            .is_some_and(|(pending, _)| *pending == request);

        match result {
            Ok(image) => {
                self.cache.insert(source.clone(), image.clone());
                if current {
                    self.lightbox_request = None;
                    self.show_lightbox_image(source, image);
                }
                Effect::None
            }
            Err(error) if current => {
                self.lightbox_request = None;
                self.frame.restore_lightbox_opacity();
                Effect::ReportLoadFailure(error)
            }
            Err(_) => Effect::None,
        }
    }

    fn show_lightbox_image(&mut self, source: PathBuf, image: ImageData) {
        let loaded = LightboxImage { source, image };
        self.frame.set_lightbox_image(Some(loaded.clone()));
        self.frame.restore_lightbox_opacity();
        self.lightbox = Some(loaded);
        self.apply_fit_to_loaded();
    }

    /// Computes the fit level now that dimensions are known and applies it.
    /// The mode follows, whatever zoom was requested while decoding.
    fn apply_fit_to_loaded(&mut self) {
        let Some(natural) = self.natural_size() else {
            return;
        };
        self.zoom.refresh_fit(natural, self.viewport);
        let level = self.zoom.apply_fit();
        if self.mode.is_open() {
            self.mode = self.mode.transition(LightboxEvent::Open);
        }
        self.show_zoom(level);
    }

    /// Hides the overlay and clears zoom, pan and cursor overrides.
    /// Returns whether the lightbox was open.
    pub fn close_lightbox(&mut self) -> bool {
        if !self.mode.is_open() {
            return false;
        }
        self.mode = self.mode.transition(LightboxEvent::Close);
        self.hold.cancel();
        self.drag.reset();
        self.press = None;
        self.lens_engaged = false;
        self.lightbox_request = None;
        self.translate = Vector::ZERO;
        self.zoom.reset();

        self.frame.set_lightbox_visible(false);
        self.frame.set_footer_visible(false);
        self.frame.set_zoom(ZoomLevel::FULL);
        self.frame.set_cursor(CursorHint::Default);
        self.frame.restore_lightbox_opacity();
        true
    }

    fn close_effect(&mut self) -> Effect {
        if self.close_lightbox() {
            Effect::Action(UserAction::CloseLightbox)
        } else {
            Effect::None
        }
    }

    /// Applies `level`, clamped to the supported range, and returns what was
    /// applied.
    pub fn set_zoom(&mut self, level: f32) -> ZoomLevel {
        let applied = self.zoom.set(level);
        self.mode = self.mode.transition(LightboxEvent::ZoomTo {
            full: applied.is_full(),
        });
        self.show_zoom(applied);
        applied
    }

    /// Switches between natural size and the stored fit level.
    pub fn toggle_full_zoom(&mut self) {
        if !self.mode.is_open() {
            return;
        }
        let level = if self.mode.is_permanent_full() {
            self.zoom.apply_fit()
        } else {
            self.zoom.apply_full()
        };
        self.mode = self.mode.transition(LightboxEvent::ToggleFull);
        self.show_zoom(level);
    }

    /// Flips the footer preference. The caller persists it.
    pub fn toggle_controls(&mut self) -> bool {
        self.controls_visible = !self.controls_visible;
        self.frame.set_footer_visible(self.controls_visible);
        self.controls_visible
    }

    fn show_zoom(&mut self, level: ZoomLevel) {
        self.translate = Vector::ZERO;
        self.frame.set_zoom(level);
        self.frame.set_cursor(self.cursor_hint());
    }

    fn cursor_hint(&self) -> CursorHint {
        if self.lightbox.is_none() {
            CursorHint::Default
        } else if self.drag.is_dragging && self.mode.is_permanent_full() {
            CursorHint::Grabbing
        } else {
            CursorHint::for_zoom(self.zoom.level, self.shift_held)
        }
    }

    fn natural_size(&self) -> Option<Size> {
        self.lightbox.as_ref().map(|loaded| loaded.image.size())
    }

    fn pointer_on_image(&self, point: Point) -> bool {
        self.natural_size().is_some_and(|natural| {
            geometry::hits_image(
                self.viewport,
                self.zoom.level.scaled(natural),
                self.translate,
                point,
            )
        })
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    fn handle_pointer(&mut self, event: PointerEvent) -> (Effect, Task<Message>) {
        if !self.mode.is_open() {
            return (Effect::None, Task::none());
        }

        match event {
            PointerEvent::Pressed(point) => (Effect::None, self.pointer_pressed(point)),
            PointerEvent::Moved(point) => {
                self.pointer_moved(point);
                (Effect::None, Task::none())
            }
            PointerEvent::Released(point) => (self.pointer_released(point), Task::none()),
            PointerEvent::Left => {
                self.pointer_left();
                (Effect::None, Task::none())
            }
        }
    }

    fn pointer_pressed(&mut self, point: Point) -> Task<Message> {
        self.cursor_position = Some(point);
        self.lens_engaged = false;
        self.drag.reset();

        if !self.pointer_on_image(point) {
            self.press = Some(PressTarget::Backdrop);
            return Task::none();
        }
        self.press = Some(PressTarget::Image);

        // A pending zoom change will reset the pan; dragging on top of it
        // would be overwritten.
        if !self.frame.has_pending_zoom_reset() {
            self.drag.start(point, self.translate);
        }

        if self.mode.is_permanent_full() && self.drag.is_dragging {
            self.frame.set_cursor(CursorHint::Grabbing);
        }

        if self.mode == LightboxMode::FitView && self.tuning.lens_enabled {
            let token = self.hold.schedule();
            return timer::sleep(self.tuning.lens_hold, token, Message::LensHoldElapsed);
        }
        Task::none()
    }

    fn pointer_moved(&mut self, point: Point) {
        self.cursor_position = Some(point);

        if self.mode.is_lens() {
            if let Some(translate) = self.lens_translate(point) {
                self.translate = translate;
                self.frame.set_translate(translate);
            }
            return;
        }

        let Some(translate) = self.drag.update(point) else {
            return;
        };
        if self.drag.has_dragged() {
            self.hold.cancel();
        }
        if self.mode.is_permanent_full() {
            self.translate = translate;
            self.frame.set_translate(translate);
        }
    }

    fn pointer_released(&mut self, point: Point) -> Effect {
        self.cursor_position = Some(point);
        let press = self.press.take();
        self.hold.cancel();

        let mut effect = Effect::None;
        if self.mode.is_lens() {
            self.end_lens();
        } else if press == Some(PressTarget::Image)
            && !self.lens_engaged
            && !self.drag.has_dragged()
            && self.pointer_on_image(point)
        {
            self.toggle_full_zoom();
            effect = Effect::Action(UserAction::ToggleZoom);
        } else if press == Some(PressTarget::Backdrop) && !self.pointer_on_image(point) {
            return self.close_effect();
        }

        self.lens_engaged = false;
        self.drag.stop();
        self.frame.set_cursor(self.cursor_hint());
        effect
    }

    fn pointer_left(&mut self) {
        self.press = None;
        self.hold.cancel();
        if self.mode.is_lens() {
            self.end_lens();
        }
        self.lens_engaged = false;
        self.drag.stop();
        self.frame.set_cursor(self.cursor_hint());
    }

    fn handle_hold_elapsed(&mut self, token: TimerToken) -> Effect {
        if !self.hold.fire(token) {
            return Effect::None;
        }
        if self.mode != LightboxMode::FitView || self.drag.has_dragged() {
            return Effect::None;
        }
        let Some(point) = self.cursor_position else {
            return Effect::None;
        };

        self.mode = self.mode.transition(LightboxEvent::LensStart);
        self.lens_engaged = true;
        self.lens_origin = self.zoom.level;
        let level = self.zoom.apply_full();
        self.show_zoom(level);

        // After the zoom write, which resets the pan.
        if let Some(translate) = self.lens_translate(point) {
            self.translate = translate;
            self.frame.set_translate(translate);
        }
        Effect::Action(UserAction::LensZoom)
    }

    /// Returns from the lens to the stored fit level.
    fn end_lens(&mut self) {
        self.mode = self.mode.transition(LightboxEvent::LensEnd);
        let level = self.zoom.apply_fit();
        self.show_zoom(level);
    }

    fn lens_translate(&self, point: Point) -> Option<Vector> {
        let natural = self.natural_size()?;
        Some(geometry::lens_translate(
            self.viewport,
            natural,
            self.lens_origin,
            point,
        ))
    }

    // =========================================================================
    // Keyboard and window
    // =========================================================================

    fn handle_raw_event(&mut self, event: event::Event) -> (Effect, Task<Message>) {
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key(&key)
            }
            event::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                self.shift_held = modifiers.shift();
                if self.mode.is_open() && !self.drag.is_dragging {
                    self.frame.set_cursor(self.cursor_hint());
                }
                (Effect::None, Task::none())
            }
            event::Event::Window(window::Event::Resized(size))
            | event::Event::Window(window::Event::Opened { size, .. }) => {
                self.resize(size);
                (Effect::None, Task::none())
            }
            _ => (Effect::None, Task::none()),
        }
    }

    /// Applies one key press, following the keyboard table for the
    /// current mode.
    pub fn handle_key(&mut self, key: &Key) -> (Effect, Task<Message>) {
        if !self.mode.is_open() {
            return match key {
                Key::Named(Named::ArrowRight) => self.handle_navigate(NavigationDirection::Next),
                Key::Named(Named::ArrowLeft) => {
                    self.handle_navigate(NavigationDirection::Previous)
                }
                _ => (Effect::None, Task::none()),
            };
        }

        // Zoom keys wait for the decoded dimensions.
        let decoded = self.lightbox.is_some();
        let effect = match key {
            Key::Named(Named::Escape) => self.close_effect(),
            Key::Character(c) => match c.as_str() {
                "1" | "+" | "=" | "-" | "_" if !decoded => Effect::None,
                "1" => {
                    self.toggle_full_zoom();
                    Effect::Action(UserAction::ToggleZoom)
                }
                "+" | "=" => {
                    let level = self.zoom.stepped_in();
                    self.set_zoom(level.value());
                    Effect::Action(UserAction::ZoomIn)
                }
                "-" | "_" => {
                    let level = self.zoom.stepped_out();
                    self.set_zoom(level.value());
                    Effect::Action(UserAction::ZoomOut)
                }
                "h" | "H" => Effect::PersistControls(self.toggle_controls()),
                _ => Effect::None,
            },
            _ => Effect::None,
        };
        (effect, Task::none())
    }

    /// Tracks the window size. An image shown at its fit level is refitted.
    fn resize(&mut self, size: Size) {
        self.viewport = size;
        let Some(natural) = self.natural_size() else {
            return;
        };
        let previous_fit = self.zoom.fit;
        self.zoom.refresh_fit(natural, size);

        if self.mode == LightboxMode::FitView && self.zoom.level == previous_fit {
            let level = self.zoom.apply_fit();
            self.show_zoom(level);
        }
    }

    fn issue_request(&mut self) -> u64 {
        self.next_request = self.next_request.wrapping_add(1);
        self.next_request
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("items", &self.gallery.len())
            .field("active", &self.gallery.active_index())
            .field("mode", &self.mode)
            .field("zoom", &self.zoom)
            .field("translate", &self.translate)
            .field("controls_visible", &self.controls_visible)
            .finish_non_exhaustive()
    }
}
