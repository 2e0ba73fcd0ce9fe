// SPDX-License-Identifier: MPL-2.0
//! Rendering of the gallery from its [`Presentation`].
//!
//! Nothing here reads the controller's logical state except the item list;
//! every visual property comes from the last applied frame batch.

use super::component::{Message, State};
use crate::config::THUMBNAIL_SIZE;
use crate::gallery::{GalleryItem, NavigationDirection};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::Presentation;
use crate::ui::styles;
use crate::ui::widgets::{scroll_lock, ZoomImage};
use iced::widget::{
    button, image, mouse_area, opaque, scrollable, stack, svg, tooltip, Column, Container, Row,
    Space, Text,
};
use iced::{alignment, ContentFit, Element, Length};

/// Renders the strip, the featured slot and, when shown, the lightbox.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let presentation = state.presentation();

    let page = Column::new()
        .push(featured(state, presentation, i18n))
        .push(strip(state.gallery().items(), presentation))
        .width(Length::Fill)
        .height(Length::Fill);

    if presentation.lightbox_visible {
        stack![page, lightbox(presentation, i18n)].into()
    } else {
        page.into()
    }
}

fn featured<'a>(
    state: &'a State,
    presentation: &'a Presentation,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let Some(view) = &presentation.featured else {
        let key = if state.gallery().is_empty() {
            "gallery-empty"
        } else {
            "gallery-loading"
        };
        return Container::new(Text::new(i18n.tr(key)).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into();
    };

    let picture = mouse_area(
        image(view.image.handle.clone())
            .content_fit(ContentFit::Contain)
            .opacity(presentation.featured_opacity)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(Message::FeaturedClicked);

    let nav_button = |label: &'static str, tooltip_key: &str, direction| {
        tooltip(
            button(Text::new(label).size(typography::TITLE_SM))
                .on_press(Message::Navigate(direction))
                .style(styles::button::lightbox_control)
                .height(sizing::BUTTON_HEIGHT)
                .padding([0.0, spacing::SM]),
            Text::new(i18n.tr(tooltip_key)).size(typography::CAPTION),
            tooltip::Position::Bottom,
        )
    };

    let controls = Row::new()
        .push(nav_button("‹", "gallery-previous", NavigationDirection::Previous))
        .push(Space::new().width(Length::Fill))
        .push(nav_button("›", "gallery-next", NavigationDirection::Next))
        .padding(spacing::MD)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    let caption = Container::new(Text::new(view.caption.as_str()).size(typography::TITLE_SM))
        .width(Length::Fill)
        .padding(spacing::XS)
        .align_x(alignment::Horizontal::Center);

    Column::new()
        .push(stack![picture, controls].height(Length::Fill))
        .push(caption)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn strip<'a>(items: &'a [GalleryItem], presentation: &'a Presentation) -> Element<'a, Message> {
    let thumbnails = items.iter().enumerate().fold(
        Row::new().spacing(spacing::XS).padding(spacing::XS),
        |row, (index, item)| {
            row.push(thumbnail(
                item,
                index,
                presentation.active_thumbnail == Some(index),
            ))
        },
    );

    let scroller = scrollable(thumbnails).direction(scrollable::Direction::Horizontal(
        scrollable::Scrollbar::default(),
    ));

    Container::new(scroll_lock(scroller, presentation.scroll_locked))
        .width(Length::Fill)
        .height(sizing::STRIP_HEIGHT + spacing::MD)
        .style(styles::container::strip)
        .into()
}

fn thumbnail(item: &GalleryItem, index: usize, active: bool) -> Element<'_, Message> {
    let is_svg = item
        .image_src
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let picture: Element<'_, Message> = if is_svg {
        svg(svg::Handle::from_path(&item.image_src))
            .content_fit(ContentFit::Cover)
            .width(THUMBNAIL_SIZE)
            .height(THUMBNAIL_SIZE)
            .into()
    } else {
        image(image::Handle::from_path(&item.image_src))
            .content_fit(ContentFit::Cover)
            .width(THUMBNAIL_SIZE)
            .height(THUMBNAIL_SIZE)
            .into()
    };

    mouse_area(
        Container::new(picture)
            .padding(spacing::XXS)
            .style(styles::container::thumbnail(active)),
    )
    .on_press(Message::ThumbnailClicked(index))
    .on_enter(Message::ThumbnailHovered(index))
    .into()
}

fn lightbox<'a>(presentation: &'a Presentation, i18n: &'a I18n) -> Element<'a, Message> {
    let mut surface = ZoomImage::new(Message::Pointer)
        .zoom(presentation.zoom, presentation.translate)
        .opacity(presentation.lightbox_opacity)
        .cursor(presentation.cursor);
    if let Some(loaded) = &presentation.lightbox_image {
        surface = surface.image(loaded.image.handle.clone(), loaded.image.size());
    }

    let backdrop = Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop);

    let close = Container::new(tooltip(
        button(Text::new("×").size(typography::TITLE_SM))
            .on_press(Message::CloseClicked)
            .style(styles::button::lightbox_control)
            .height(sizing::BUTTON_HEIGHT)
            .padding([0.0, spacing::SM]),
        Text::new(i18n.tr("lightbox-close")).size(typography::CAPTION),
        tooltip::Position::Left,
    ))
    .width(Length::Fill)
    .padding(spacing::MD)
    .align_x(alignment::Horizontal::Right);

    let mut layers = stack![backdrop, close];

    if presentation.lightbox_image.is_none() {
        layers = layers.push(
            Container::new(Text::new(i18n.tr("gallery-loading")).size(typography::BODY))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        );
    }

    if presentation.footer_visible {
        layers = layers.push(footer(presentation, i18n));
    }

    opaque(layers)
}

fn footer<'a>(presentation: &Presentation, i18n: &I18n) -> Element<'a, Message> {
    let mode_key = if presentation.zoom.is_full() {
        "lightbox-mode-full"
    } else {
        "lightbox-mode-fit"
    };
    let percent = presentation.zoom.percent().to_string();

    let status = Row::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr(mode_key)).size(typography::BODY))
        .push(
            Text::new(i18n.tr_with_args("lightbox-zoom-percent", &[("percent", &percent)]))
                .size(typography::BODY),
        );

    let panel = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(status)
            .push(Text::new(i18n.tr("lightbox-controls-hint")).size(typography::CAPTION)),
    )
    .padding(spacing::SM)
    .style(styles::container::footer);

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .into()
}
