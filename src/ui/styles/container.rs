// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Frame around a thumbnail; the active one gets the brand ring.
pub fn thumbnail(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let ring = if active {
            Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_ACTIVE,
                radius: radius::SM.into(),
            }
        } else {
            Border {
                color: theme.extended_palette().background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            }
        };

        container::Style {
            border: ring,
            ..Default::default()
        }
    }
}

/// Thumbnail strip background, derived from the active theme.
pub fn strip(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;
    container::Style {
        background: Some(Background::Color(base)),
        ..Default::default()
    }
}

/// Dark backdrop filling the window behind the lightbox image.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Controls footer at the bottom of the lightbox.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
