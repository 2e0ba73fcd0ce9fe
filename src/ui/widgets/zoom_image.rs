// SPDX-License-Identifier: MPL-2.0
//! Lightbox image surface.
//!
//! Fills its bounds, draws the image centered at the given zoom and pan, and
//! reports pointer input in bounds-relative coordinates. Moves are only
//! reported between a press and its release, which is all dragging and the
//! lens need.

use crate::ui::gallery::geometry;
use crate::ui::state::{CursorHint, ZoomLevel};
use iced::advanced::image::{self as advanced_image, Renderer as _};
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::widget::image::Handle;
use iced::{mouse, Element, Event, Length, Point, Rectangle, Size, Theme, Vector};

/// Pointer input over the lightbox, relative to its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Point),
    Moved(Point),
    Released(Point),
    /// The pointer left the window while pressed.
    Left,
}

#[derive(Debug, Default)]
struct State {
    pressed: bool,
}

pub struct ZoomImage<'a, Message> {
    handle: Option<Handle>,
    natural: Size,
    zoom: ZoomLevel,
    translate: Vector,
    opacity: f32,
    cursor: CursorHint,
    on_pointer: Box<dyn Fn(PointerEvent) -> Message + 'a>,
}

impl<'a, Message> ZoomImage<'a, Message> {
    /// Surface without an image yet; still reports pointer input so the
    /// backdrop can be clicked while loading.
    pub fn new(on_pointer: impl Fn(PointerEvent) -> Message + 'a) -> Self {
        Self {
            handle: None,
            natural: Size::ZERO,
            zoom: ZoomLevel::FULL,
            translate: Vector::new(0.0, 0.0),
            opacity: 1.0,
            cursor: CursorHint::Default,
            on_pointer: Box::new(on_pointer),
        }
    }

    #[must_use]
    pub fn image(mut self, handle: Handle, natural: Size) -> Self {
        self.handle = Some(handle);
        self.natural = natural;
        self
    }

    #[must_use]
    pub fn zoom(mut self, zoom: ZoomLevel, translate: Vector) -> Self {
        self.zoom = zoom;
        self.translate = translate;
        self
    }

    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn cursor(mut self, cursor: CursorHint) -> Self {
        self.cursor = cursor;
        self
    }

    fn image_bounds(&self, bounds: Rectangle) -> Rectangle {
        let displayed = self.zoom.scaled(self.natural);
        let rect = geometry::image_rect(bounds.size(), displayed, self.translate);
        Rectangle {
            x: rect.x + bounds.x,
            y: rect.y + bounds.y,
            ..rect
        }
    }
}

impl<Message> Widget<Message, Theme, iced::Renderer> for ZoomImage<'_, Message> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let Some(handle) = &self.handle else {
            return;
        };
        let bounds = layout.bounds();
        let image_bounds = self.image_bounds(bounds);

        renderer.with_layer(bounds, |renderer| {
            let image = advanced_image::Image::<Handle> {
                handle: handle.clone(),
                filter_method: advanced_image::FilterMethod::Linear,
                rotation: iced::Radians(0.0),
                opacity: self.opacity,
                snap: true,
                border_radius: iced::border::Radius::default(),
            };
            renderer.draw_image(image, image_bounds, bounds);
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();
        let relative = |p: Point| Point::new(p.x - bounds.x, p.y - bounds.y);

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    state.pressed = true;
                    shell.publish((self.on_pointer)(PointerEvent::Pressed(position)));
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) if state.pressed => {
                shell.publish((self.on_pointer)(PointerEvent::Moved(relative(*position))));
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if state.pressed => {
                state.pressed = false;
                let event = cursor
                    .position()
                    .map_or(PointerEvent::Left, |p| PointerEvent::Released(relative(p)));
                shell.publish((self.on_pointer)(event));
                shell.capture_event();
            }
            Event::Mouse(mouse::Event::CursorLeft) if state.pressed => {
                state.pressed = false;
                shell.publish((self.on_pointer)(PointerEvent::Left));
            }
            _ => {}
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        if self.handle.is_none() || !cursor.is_over(self.image_bounds(layout.bounds())) {
            return mouse::Interaction::default();
        }
        interaction_for(self.cursor)
    }
}

fn interaction_for(hint: CursorHint) -> mouse::Interaction {
    match hint {
        CursorHint::Default => mouse::Interaction::default(),
        CursorHint::ZoomIn => mouse::Interaction::ZoomIn,
        CursorHint::ZoomOut => mouse::Interaction::ZoomOut,
        CursorHint::Grabbing => mouse::Interaction::Grabbing,
    }
}

impl<'a, Message: 'a> From<ZoomImage<'a, Message>> for Element<'a, Message> {
    fn from(widget: ZoomImage<'a, Message>) -> Self {
        Element::new(widget)
    }
}
