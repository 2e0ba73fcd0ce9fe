// SPDX-License-Identifier: MPL-2.0
//! Image decoding and caching for the gallery.

pub mod image;
pub mod prefetch;

use std::path::Path;

pub use image::{load_featured, load_image, ImageData};
pub use prefetch::ImageCache;

/// Supported image extensions (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
];

/// Whether the path has a supported image extension (case-insensitive).
#[must_use]
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image("photos/a.JPG"));
        assert!(is_supported_image("photos/b.svg"));
        assert!(!is_supported_image("photos/notes.txt"));
        assert!(!is_supported_image("photos/no_extension"));
    }
}
