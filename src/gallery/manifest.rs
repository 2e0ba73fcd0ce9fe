// SPDX-License-Identifier: MPL-2.0
//! Building a gallery from disk.
//!
//! A gallery comes from one of three places:
//! - a TOML manifest listing `[[item]]` tables,
//! - a directory, whose supported images are listed alphabetically,
//! - a single image, which opens its directory with that image active.
//!
//! ```toml
//! [[item]]
//! image = "thumbs/harbour.jpg"
//! highres = "full/harbour.jpg"
//! crop = "50% 30%"
//! title = "Harbour at dusk"
//! alt = "Boats moored in a harbour"
//! ```
//!
//! Relative paths in a manifest resolve against the manifest's directory.

use super::{Gallery, GalleryItem, ThumbnailAttributes};
use crate::error::{Error, Result};
use crate::media;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "item")]
    items: Vec<ManifestItem>,
}

#[derive(Debug, Deserialize)]
struct ManifestItem {
    image: Option<PathBuf>,
    highres: Option<PathBuf>,
    crop: Option<String>,
    title: Option<String>,
    alt: Option<String>,
}

/// Where a gallery is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GallerySource {
    Manifest(PathBuf),
    Directory(PathBuf),
    /// An image file; its directory is scanned and it becomes active.
    Image(PathBuf),
}

impl GallerySource {
    /// Classifies `path` by what exists on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the path does not exist and
    /// [`Error::Manifest`] for a file that is neither TOML nor a supported image.
    pub fn detect(path: &Path) -> Result<Self> {
        if path.is_dir() {
            return Ok(Self::Directory(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(Error::Io(format!("{} does not exist", path.display())));
        }

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Ok(Self::Manifest(path.to_path_buf()))
        } else if media::is_supported_image(path) {
            Ok(Self::Image(path.to_path_buf()))
        } else {
            Err(Error::Manifest(format!(
                "{} is neither a gallery manifest nor a supported image",
                path.display()
            )))
        }
    }

    /// Builds the gallery.
    pub fn load(&self) -> Result<Gallery> {
        match self {
            Self::Manifest(path) => load_manifest(path).map(Gallery::new),
            Self::Directory(dir) => scan_directory(dir).map(Gallery::new),
            Self::Image(path) => {
                let dir = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or(Path::new("."));
                let items = scan_directory(dir)?;
                let active = items
                    .iter()
                    .position(|item| same_file(&item.image_src, path))
                    .unwrap_or(0);
                Ok(Gallery::with_active(items, active))
            }
        }
    }
}

/// Detects the source kind of `path` and builds its gallery.
pub fn load_source(path: &Path) -> Result<Gallery> {
    GallerySource::detect(path)?.load()
}

/// Parses a manifest file into items.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Manifest`]
/// for invalid TOML or an item without an `image`.
pub fn load_manifest(path: &Path) -> Result<Vec<GalleryItem>> {
    let content = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or(Path::new(""));
    parse_manifest(&content, base_dir)
}

fn parse_manifest(content: &str, base_dir: &Path) -> Result<Vec<GalleryItem>> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::Manifest(e.to_string()))?;

    manifest
        .items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let image = item
                .image
                .filter(|p| !p.as_os_str().is_empty())
                .ok_or_else(|| Error::Manifest(format!("item {} has no image", index + 1)))?;

            Ok(GalleryItem::from_attributes(ThumbnailAttributes {
                image: base_dir.join(image),
                highres: item.highres.map(|p| base_dir.join(p)),
                crop: item.crop,
                title: item.title,
                alt: item.alt,
            }))
        })
        .collect()
}

/// Lists the supported images of `dir`, sorted by file name.
pub fn scan_directory(dir: &Path) -> Result<Vec<GalleryItem>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && media::is_supported_image(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files
        .into_iter()
        .map(|image| {
            GalleryItem::from_attributes(ThumbnailAttributes {
                image,
                ..ThumbnailAttributes::default()
            })
        })
        .collect())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
