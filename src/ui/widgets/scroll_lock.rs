// SPDX-License-Identifier: MPL-2.0
//! Freezes the thumbnail strip while the lightbox covers it.
//!
//! The strip keeps its layout and keeps drawing; only input that could move
//! its scroll offset is swallowed.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{mouse, touch, Element, Event, Length, Rectangle, Renderer, Size, Theme};

pub struct ScrollLock<'a, Message> {
    strip: Element<'a, Message>,
    locked: bool,
}

/// Wraps `strip`, dropping scroll input while `locked` holds.
pub fn scroll_lock<'a, Message>(
    strip: impl Into<Element<'a, Message>>,
    locked: bool,
) -> ScrollLock<'a, Message> {
    ScrollLock {
        strip: strip.into(),
        locked,
    }
}

impl<Message> Widget<Message, Theme, Renderer> for ScrollLock<'_, Message> {
    fn size(&self) -> Size<Length> {
        self.strip.as_widget().size()
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.strip)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.strip]);
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let [strip] = tree.children.as_mut_slice() else {
            return layout::Node::new(limits.max());
        };
        self.strip.as_widget_mut().layout(strip, renderer, limits)
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        // A locked strip must not show hover feedback under the overlay.
        let cursor = if self.locked {
            mouse::Cursor::Unavailable
        } else {
            cursor
        };
        if let [strip] = tree.children.as_slice() {
            self.strip
                .as_widget()
                .draw(strip, renderer, theme, style, layout, cursor, viewport);
        }
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if self.locked && moves_scroll(event) {
            return;
        }
        if let [strip] = tree.children.as_mut_slice() {
            self.strip.as_widget_mut().update(
                strip, event, layout, cursor, renderer, clipboard, shell, viewport,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        match tree.children.as_slice() {
            [strip] if !self.locked => self
                .strip
                .as_widget()
                .mouse_interaction(strip, layout, cursor, viewport, renderer),
            _ => mouse::Interaction::default(),
        }
    }
}

impl<'a, Message: 'a> From<ScrollLock<'a, Message>> for Element<'a, Message> {
    fn from(lock: ScrollLock<'a, Message>) -> Self {
        Element::new(lock)
    }
}

/// Wheel, scrollbar grabs and touch panning can all move a scrollable.
fn moves_scroll(event: &Event) -> bool {
    matches!(
        event,
        Event::Mouse(
            mouse::Event::WheelScrolled { .. }
                | mouse::Event::ButtonPressed(_)
                | mouse::Event::CursorMoved { .. }
        ) | Event::Touch(touch::Event::FingerPressed { .. } | touch::Event::FingerMoved { .. })
    )
}
