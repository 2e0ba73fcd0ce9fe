// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an image gallery built with the Iced GUI framework.
//!
//! A strip of thumbnails drives a featured image; the featured image opens a
//! full-window lightbox with fit-to-screen and actual-size zoom, drag
//! panning and a press-and-hold lens.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
