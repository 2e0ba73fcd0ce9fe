// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events are routed to the gallery. Pointer
//! input reaches it through its widgets instead, so the lightbox surface
//! sees presses before the page behind it does.

use super::Message;
use crate::ui::gallery::component;
use iced::{event, keyboard, window, Subscription};

/// Routes keyboard and window events to the gallery.
///
/// Key presses already captured by a widget (a focused scrollable, for
/// instance) are not forwarded. Modifier changes and window geometry are
/// always forwarded.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        let forward = match &event {
            event::Event::Keyboard(keyboard::Event::ModifiersChanged(_)) => true,
            event::Event::Keyboard(_) => matches!(status, event::Status::Ignored),
            event::Event::Window(window::Event::Resized(_) | window::Event::Opened { .. }) => {
                true
            }
            _ => false,
        };

        forward.then(|| {
            Message::Gallery(component::Message::RawEvent {
                window: window_id,
                event,
            })
        })
    })
}

/// Frame ticks while the gallery has writes waiting to be painted.
pub fn create_frame_subscription(gallery: &component::State) -> Subscription<Message> {
    gallery.subscription().map(Message::Gallery)
}
