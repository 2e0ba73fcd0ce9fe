// SPDX-License-Identifier: MPL-2.0
//! Decoded-image cache for lightbox sources.
//!
//! Hovering a thumbnail preloads its high-resolution source here, so that a
//! double click or a click on the featured image opens the lightbox without
//! a loading cue.
//!
//! - **LRU eviction**: least recently used images are evicted first
//! - **Memory-bounded**: total decoded size limited by a byte budget
//! - **Source-keyed**: entries indexed by file path

use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Default cache budget in bytes (64 MB), a handful of full-resolution photos.
pub const DEFAULT_CACHE_BYTES: usize = 64 * 1024 * 1024;

/// Default maximum number of cached images.
pub const DEFAULT_MAX_IMAGES: usize = 12;

const FALLBACK_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_MAX_IMAGES) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLimits {
    pub max_bytes: usize,
    pub max_images: usize,
}

impl Default for CacheLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_CACHE_BYTES,
            max_images: DEFAULT_MAX_IMAGES,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    image: ImageData,
    size_bytes: usize,
}

impl CacheEntry {
    fn new(image: ImageData) -> Self {
        let size_bytes = (image.width as usize) * (image.height as usize) * 4;
        Self { image, size_bytes }
    }
}

/// LRU cache of decoded lightbox images.
pub struct ImageCache {
    cache: LruCache<PathBuf, CacheEntry>,
    limits: CacheLimits,
    current_bytes: usize,
    /// Sources with a preload in flight, so hovering twice decodes once.
    in_flight: Vec<PathBuf>,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(CacheLimits::default())
    }
}

impl ImageCache {
    #[must_use]
    pub fn new(limits: CacheLimits) -> Self {
        let capacity = NonZeroUsize::new(limits.max_images).unwrap_or(FALLBACK_CAPACITY);
        Self {
            cache: LruCache::new(capacity),
            limits,
            current_bytes: 0,
            in_flight: Vec::new(),
        }
    }

    /// Inserts a decoded image. Images larger than half the budget are not
    /// cached. Returns whether the image was stored.
    pub fn insert(&mut self, source: PathBuf, image: ImageData) -> bool {
        self.in_flight.retain(|p| p != &source);

        let entry = CacheEntry::new(image);
        if entry.size_bytes > self.limits.max_bytes / 2 {
            return false;
        }

        if let Some(existing) = self.cache.pop(&source) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        while self.current_bytes + entry.size_bytes > self.limits.max_bytes {
            let Some((_, evicted)) = self.cache.pop_lru() else {
                break;
            };
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
        }

        self.current_bytes += entry.size_bytes;
        if let Some((_, evicted)) = self.cache.push(source, entry) {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
        }
        true
    }

    /// Returns a cached image, refreshing its LRU position.
    pub fn get(&mut self, source: &Path) -> Option<ImageData> {
        self.cache.get(source).map(|entry| entry.image.clone())
    }

    /// Marks `source` for preloading. Returns `false` when it is already
    /// cached or being decoded.
    pub fn begin_preload(&mut self, source: &Path) -> bool {
        if self.cache.contains(source) || self.in_flight.iter().any(|p| p == source) {
            return false;
        }
        self.in_flight.push(source.to_path_buf());
        true
    }

    /// Forgets a preload that failed.
    pub fn abandon_preload(&mut self, source: &Path) {
        self.in_flight.retain(|p| p != source);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("limits", &self.limits)
            .field("in_flight", &self.in_flight.len())
            .finish()
    }
}
