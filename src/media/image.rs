// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).
//!
//! Two entry points: [`load_image`] decodes a file as-is for the lightbox,
//! [`load_featured`] additionally cover-crops it to the featured slot's
//! aspect ratio at the item's crop position.

use crate::error::{Error, ImageLoadError, Result};
use crate::gallery::CropPosition;
use iced::widget::image;
use iced::Size;
use image_rs::{DynamicImage, GenericImageView, RgbaImage};
use resvg::usvg;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Natural size in logical pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        #[allow(clippy::cast_precision_loss)]
        Size::new(self.width as f32, self.height as f32)
    }

    fn from_dynamic(image: DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        Self::from_rgba(width, height, image.to_rgba8().into_vec())
    }
}

/// Decodes a file into pixels, rasterizing SVG with resvg.
fn decode(path: &Path) -> Result<DynamicImage> {
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        let svg_data = fs::read(path)?;
        let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
            .map_err(|e| Error::Svg(e.to_string()))?;

        let pixmap_size = tree.size().to_int_size();
        let width = pixmap_size.width();
        let height = pixmap_size.height();
        if width == 0 || height == 0 {
            return Err(Error::Svg("SVG has empty dimensions".into()));
        }

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let rgba = RgbaImage::from_raw(width, height, pixmap.take())
            .ok_or_else(|| Error::Svg("SVG pixmap has unexpected size".into()))?;
        Ok(DynamicImage::ImageRgba8(rgba))
    } else {
        let img_bytes = fs::read(path).map_err(|e| Error::Io(e.to_string()))?;
        Ok(image_rs::load_from_memory(&img_bytes)?)
    }
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Io`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    decode(path.as_ref()).map(ImageData::from_dynamic)
}

/// Loads an image cropped to fill a slot of `aspect_ratio` (width / height).
///
/// The crop behaves like CSS `object-fit: cover`: the image is cut along its
/// overflowing axis only, and `crop` picks which part of that axis is kept.
pub fn load_featured<P: AsRef<Path>>(
    path: P,
    crop: CropPosition,
    aspect_ratio: f32,
) -> Result<ImageData> {
    let image = decode(path.as_ref())?;
    let (width, height) = image.dimensions();
    let (x, y, w, h) = cover_crop(width, height, aspect_ratio, crop);
    Ok(ImageData::from_dynamic(image.crop_imm(x, y, w, h)))
}

/// Rectangle `(x, y, width, height)` of a `width`×`height` image that covers
/// a slot of `aspect_ratio`, positioned by `crop`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn cover_crop(
    width: u32,
    height: u32,
    aspect_ratio: f32,
    crop: CropPosition,
) -> (u32, u32, u32, u32) {
    if width == 0 || height == 0 || !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return (0, 0, width, height);
    }

    let image_ratio = width as f32 / height as f32;

    if image_ratio > aspect_ratio {
        let kept = ((height as f32 * aspect_ratio).round() as u32).clamp(1, width);
        let x = ((width - kept) as f32 * crop.x_fraction()).round() as u32;
        (x, 0, kept, height)
    } else {
        let kept = ((width as f32 / aspect_ratio).round() as u32).clamp(1, height);
        let y = ((height - kept) as f32 * crop.y_fraction()).round() as u32;
        (0, y, width, kept)
    }
}

/// Decodes `path` on the blocking pool.
pub async fn load_image_async(path: PathBuf) -> std::result::Result<ImageData, ImageLoadError> {
    let source = path.display().to_string();
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .map_err(|e| ImageLoadError::new(source.clone(), format!("Load task failed: {e}")))?
        .map_err(|e| ImageLoadError::new(source, e.to_string()))
}

/// Decodes and crops `path` for the featured slot on the blocking pool.
pub async fn load_featured_async(
    path: PathBuf,
    crop: CropPosition,
    aspect_ratio: f32,
) -> std::result::Result<ImageData, ImageLoadError> {
    let source = path.display().to_string();
    tokio::task::spawn_blocking(move || load_featured(&path, crop, aspect_ratio))
        .await
        .map_err(|e| ImageLoadError::new(source.clone(), format!("Load task failed: {e}")))?
        .map_err(|e| ImageLoadError::new(source, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::Rgba;
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.size(), Size::new(4.0, 2.0));
    }

    #[test]
    fn load_svg_image_rasterizes_successfully() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("sample.svg");
        let svg_content = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>
        "#;
        fs::write(&svg_path, svg_content.trim()).expect("failed to write svg");

        let data = load_image(&svg_path).expect("svg should load successfully");
        assert_eq!(data.width, 6);
        assert_eq!(data.height, 3);
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_svg_returns_svg_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_svg_path = temp_dir.path().join("broken.svg");
        fs::write(&bad_svg_path, "<svg>oops").expect("failed to write invalid svg");

        match load_image(&bad_svg_path) {
            Err(Error::Svg(message)) => assert!(!message.is_empty()),
            other => panic!("expected Svg error, got {other:?}"),
        }
    }

    #[test]
    fn featured_crop_fills_slot_aspect() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("wide.png");
        RgbaImage::from_pixel(320, 100, Rgba([0, 255, 0, 255]))
            .save(&image_path)
            .expect("write png");

        let data = load_featured(&image_path, CropPosition::default(), 16.0 / 10.0)
            .expect("featured crop should load");
        assert_eq!((data.width, data.height), (160, 100));
    }

    #[test]
    fn cover_crop_on_wide_image_cuts_horizontally() {
        let crop = CropPosition::new(50.0, 14.0);
        assert_eq!(cover_crop(400, 100, 2.0, crop), (100, 0, 200, 100));
    }

    #[test]
    fn cover_crop_on_tall_image_uses_vertical_position() {
        // 100x400 into 1:1 keeps 100 rows, 300 spare rows, 14% → 42
        let crop = CropPosition::new(50.0, 14.0);
        assert_eq!(cover_crop(100, 400, 1.0, crop), (0, 42, 100, 100));
    }

    #[test]
    fn cover_crop_ignores_degenerate_ratio() {
        assert_eq!(
            cover_crop(10, 10, 0.0, CropPosition::default()),
            (0, 0, 10, 10)
        );
    }
}
