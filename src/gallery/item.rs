// SPDX-License-Identifier: MPL-2.0
//! Gallery items and their attribute fallbacks.

use crate::config::DEFAULT_CROP;
use std::fmt;
use std::path::{Path, PathBuf};

/// Which part of an image stays visible when it is cropped to fill the
/// featured slot, as percentages along each axis (`0` = left/top edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropPosition {
    x: f32,
    y: f32,
}

impl Default for CropPosition {
    fn default() -> Self {
        // Keep in sync with DEFAULT_CROP.
        Self { x: 50.0, y: 14.0 }
    }
}

impl CropPosition {
    /// Creates a position, clamping both axes to `0..=100`.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        let clamp = |v: f32| if v.is_finite() { v.clamp(0.0, 100.0) } else { 50.0 };
        Self {
            x: clamp(x),
            y: clamp(y),
        }
    }

    /// Parses `"<x>% <y>%"`, also accepting the `left`, `center`, `right`,
    /// `top` and `bottom` keywords. Anything unparseable yields the default.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::try_parse(value).unwrap_or_default()
    }

    fn try_parse(value: &str) -> Option<Self> {
        let tokens: Vec<&str> = value.split_whitespace().collect();

        match tokens.as_slice() {
            [single] => match Axis::of(single)? {
                Axis::Vertical(y) => Some(Self::new(50.0, y)),
                Axis::Horizontal(x) | Axis::Either(x) => Some(Self::new(x, 50.0)),
            },
            [first, second] => {
                let (x, y) = match (Axis::of(first)?, Axis::of(second)?) {
                    // "top left" style
                    (Axis::Vertical(y), Axis::Horizontal(x) | Axis::Either(x)) => (x, y),
                    (Axis::Either(y), Axis::Horizontal(x)) => (x, y),
                    (Axis::Horizontal(x) | Axis::Either(x), Axis::Vertical(y) | Axis::Either(y)) => {
                        (x, y)
                    }
                    _ => return None,
                };
                Some(Self::new(x, y))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn x(self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> f32 {
        self.y
    }

    /// Horizontal position as a `0..=1` fraction.
    #[must_use]
    pub fn x_fraction(self) -> f32 {
        self.x / 100.0
    }

    /// Vertical position as a `0..=1` fraction.
    #[must_use]
    pub fn y_fraction(self) -> f32 {
        self.y / 100.0
    }
}

impl fmt::Display for CropPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% {}%", self.x, self.y)
    }
}

/// A crop token and the axis it binds to.
enum Axis {
    Horizontal(f32),
    Vertical(f32),
    Either(f32),
}

impl Axis {
    fn of(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "left" => Some(Axis::Horizontal(0.0)),
            "right" => Some(Axis::Horizontal(100.0)),
            "top" => Some(Axis::Vertical(0.0)),
            "bottom" => Some(Axis::Vertical(100.0)),
            "center" => Some(Axis::Either(50.0)),
            other => {
                let percent = other.strip_suffix('%')?.trim().parse::<f32>().ok()?;
                percent.is_finite().then_some(Axis::Either(percent))
            }
        }
    }
}

/// Raw attributes of one thumbnail, as found in a manifest or derived from a
/// file on disk. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThumbnailAttributes {
    pub image: PathBuf,
    pub highres: Option<PathBuf>,
    pub crop: Option<String>,
    pub title: Option<String>,
    pub alt: Option<String>,
}

/// One entry of the gallery. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    /// Source decoded for the featured slot and the thumbnail.
    pub image_src: PathBuf,
    /// Source shown in the lightbox.
    pub high_res_src: PathBuf,
    pub crop_position: CropPosition,
    /// Caption under the featured image.
    pub title: String,
    /// Accessible description of the thumbnail.
    pub alt: String,
}

impl GalleryItem {
    /// Builds an item, applying the fallbacks:
    /// `highres` → `image`, `crop` → `50% 14%`, `title` → `alt` → file stem.
    #[must_use]
    pub fn from_attributes(attributes: ThumbnailAttributes) -> Self {
        let ThumbnailAttributes {
            image,
            highres,
            crop,
            title,
            alt,
        } = attributes;

        let alt = non_empty(alt).unwrap_or_else(|| file_stem(&image));
        let title = non_empty(title).unwrap_or_else(|| alt.clone());
        let crop_position = CropPosition::parse(
            non_empty(crop).as_deref().unwrap_or(DEFAULT_CROP),
        );
        let high_res_src = highres
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| image.clone());

        Self {
            image_src: image,
            high_res_src,
            crop_position,
            title,
            alt,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_crop_matches_constant() {
        assert_eq!(CropPosition::parse(DEFAULT_CROP), CropPosition::default());
    }

    #[test]
    fn parses_percent_pair() {
        let crop = CropPosition::parse("30% 70%");
        assert_eq!((crop.x(), crop.y()), (30.0, 70.0));
    }

    #[test]
    fn parses_keywords_in_any_order() {
        assert_eq!(CropPosition::parse("top left"), CropPosition::new(0.0, 0.0));
        assert_eq!(CropPosition::parse("right bottom"), CropPosition::new(100.0, 100.0));
        assert_eq!(CropPosition::parse("center top"), CropPosition::new(50.0, 0.0));
        assert_eq!(CropPosition::parse("bottom"), CropPosition::new(50.0, 100.0));
        assert_eq!(CropPosition::parse("25%"), CropPosition::new(25.0, 50.0));
    }

    #[test]
    fn clamps_out_of_range_percentages() {
        assert_eq!(CropPosition::parse("150% -20%"), CropPosition::new(100.0, 0.0));
    }

    #[test]
    fn unparseable_crop_uses_default() {
        assert_eq!(CropPosition::parse("12px 4em"), CropPosition::default());
        assert_eq!(CropPosition::parse("left right"), CropPosition::default());
        assert_eq!(CropPosition::parse(""), CropPosition::default());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let crop = CropPosition::new(12.5, 80.0);
        assert_eq!(CropPosition::parse(&crop.to_string()), crop);
    }

    #[test]
    fn missing_attributes_fall_back() {
        let item = GalleryItem::from_attributes(ThumbnailAttributes {
            image: PathBuf::from("photos/harbour.jpg"),
            alt: Some("Harbour at dusk".into()),
            ..ThumbnailAttributes::default()
        });

        assert_eq!(item.high_res_src, PathBuf::from("photos/harbour.jpg"));
        assert_eq!(item.crop_position, CropPosition::default());
        assert_eq!(item.title, "Harbour at dusk");
    }

    #[test]
    fn empty_title_falls_back_to_file_stem_without_alt() {
        let item = GalleryItem::from_attributes(ThumbnailAttributes {
            image: PathBuf::from("photos/lighthouse.png"),
            title: Some("  ".into()),
            ..ThumbnailAttributes::default()
        });
        assert_eq!(item.title, "lighthouse");
        assert_eq!(item.alt, "lighthouse");
    }

    #[test]
    fn explicit_attributes_win() {
        let item = GalleryItem::from_attributes(ThumbnailAttributes {
            image: PathBuf::from("a.jpg"),
            highres: Some(PathBuf::from("a_full.jpg")),
            crop: Some("10% 20%".into()),
            title: Some("Title".into()),
            alt: Some("Alt".into()),
        });

        assert_eq!(item.high_res_src, PathBuf::from("a_full.jpg"));
        assert_eq!(item.crop_position, CropPosition::new(10.0, 20.0));
        assert_eq!(item.title, "Title");
        assert_eq!(item.alt, "Alt");
    }
}
