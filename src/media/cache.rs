// SPDX-License-Identifier: MPL-2.0
//! Display cache for decoded images.
//!
//! Going back to an image already shown should not decode it again.
//!
//! # Design
//!
//! - **LRU eviction**: least recently shown images are evicted first
//! - **Count-bounded**: at most `capacity` images are kept
//! - **Path-keyed**: images indexed by their full source path
//! - **Session-scoped**: cleared wholesale when a new source folder is loaded

use crate::config::DEFAULT_CACHE_CAPACITY;
use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// LRU cache of decoded images keyed by path.
pub struct ImageCache {
    cache: LruCache<PathBuf, ImageData>,
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` images.
    ///
    /// A capacity of zero falls back to [`DEFAULT_CACHE_CAPACITY`].
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or(NonZeroUsize::new(DEFAULT_CACHE_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Gets an image by path, marking it as most recently used.
    pub fn get(&mut self, path: &Path) -> Option<&ImageData> {
        self.cache.get(path)
    }

    /// Gets an image by path without touching the LRU order.
    pub fn peek(&self, path: &Path) -> Option<&ImageData> {
        self.cache.peek(path)
    }

    /// Inserts an image, evicting the least recently used one when full.
    pub fn insert(&mut self, path: PathBuf, image: ImageData) {
        if let Some((evicted, _)) = self.cache.push(path, image) {
            tracing::trace!(path = %evicted.display(), "display cache eviction");
        }
    }

    /// Removes an image, returning whether it was cached.
    pub fn remove(&mut self, path: &Path) -> bool {
        self.cache.pop(path).is_some()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }

    /// Clears all cached images.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_image() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn insert_then_get_returns_image() {
        let mut cache = ImageCache::new(4);
        cache.insert(PathBuf::from("/a.png"), tiny_image());

        assert!(cache.get(Path::new("/a.png")).is_some());
        assert!(cache.get(Path::new("/b.png")).is_none());
    }

    #[test]
    fn least_recently_used_is_evicted() {
        let mut cache = ImageCache::new(2);
        cache.insert(PathBuf::from("/a.png"), tiny_image());
        cache.insert(PathBuf::from("/b.png"), tiny_image());

        // Touch `a` so `b` becomes the eviction candidate
        cache.get(Path::new("/a.png"));
        cache.insert(PathBuf::from("/c.png"), tiny_image());

        assert!(cache.contains(Path::new("/a.png")));
        assert!(!cache.contains(Path::new("/b.png")));
        assert!(cache.contains(Path::new("/c.png")));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn remove_and_clear() {
        let mut cache = ImageCache::new(4);
        cache.insert(PathBuf::from("/a.png"), tiny_image());
        cache.insert(PathBuf::from("/b.png"), tiny_image());

        assert!(cache.remove(Path::new("/a.png")));
        assert!(!cache.remove(Path::new("/a.png")));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn zero_capacity_falls_back_to_default() {
        let cache = ImageCache::new(0);
        assert_eq!(cache.capacity(), DEFAULT_CACHE_CAPACITY);
    }
}
