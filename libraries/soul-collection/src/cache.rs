//! Sliding window cache over a paged entity source
//!
//! Gives a list view the illusion of a randomly indexable collection of any
//! size while holding at most one page (`batch_size` items) in memory.
//!
//! # Paging
//!
//! The collection is split into fixed pages `[k * batch, (k + 1) * batch)`.
//! A request for index `i` is served from the page starting at
//! `i - i % batch`. If the window already sits on that page it is a hit,
//! otherwise that page is fetched and replaces the window. Forward scroll,
//! backward scroll and arbitrary jumps all take the same path and cost at
//! most one page fetch.
//!
//! # Reads mutate
//!
//! [`WindowCache::count`] and [`WindowCache::item`] take `&mut self`: a read
//! may populate the cached count or move the window. The cache is meant to
//! be owned by the single thread driving the view; sharing it across threads
//! requires external locking.

use crate::config::CacheConfig;
use crate::error::Result;
use crate::window::{page_start, Window};
use soul_core::{EntitySource, QueryKey};
use tracing::{debug, trace, warn};

/// Lazily populated, page-aligned window over an [`EntitySource`]
pub struct WindowCache<S: EntitySource> {
    /// Injected paged source
    source: S,

    /// Parameters of every source call
    key: QueryKey,

    /// Page size and maximum window length
    batch_size: usize,

    /// Currently materialized page (`None` until the first fetch)
    window: Option<Window<S::Item>>,

    /// Cached result of `fetch_count` (`None` = unknown)
    total_count: Option<usize>,
}

impl<S: EntitySource> WindowCache<S> {
    /// Create a cache listing the whole collection in default order
    ///
    /// Nothing is fetched until the first `count()` or `item()`.
    pub fn new(source: S, config: CacheConfig) -> Result<Self> {
        Self::with_key(source, config, QueryKey::default())
    }

    /// Create a cache for a specific query
    ///
    /// # Errors
    /// Returns `InvalidBatchSize` if the configured batch size is zero
    pub fn with_key(source: S, config: CacheConfig, key: QueryKey) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            source,
            key,
            batch_size: config.batch_size,
            window: None,
            total_count: None,
        })
    }

    /// Total number of items in the collection
    ///
    /// The first call queries the source and caches the answer until the
    /// next [`invalidate`](Self::invalidate). A source failure yields 0 and
    /// leaves the count unknown, so the next call asks again.
    pub fn count(&mut self) -> usize {
        if let Some(total) = self.total_count {
            return total;
        }

        match self.source.fetch_count(&self.key) {
            Ok(total) => {
                debug!("Collection count refreshed: {} items", total);
                self.total_count = Some(total);
                total
            }
            Err(e) => {
                warn!("Failed to count collection items: {}", e);
                0
            }
        }
    }

    /// Item at logical position `index`
    ///
    /// Returns `None` when `index` is outside `[0, count())`, when the
    /// source fails to deliver the page, or when the source returned a
    /// short page that does not reach `index` (the collection shrank).
    /// Out-of-range requests never touch the source.
    pub fn item(&mut self, index: usize) -> Option<&S::Item> {
        let total = self.count();
        if index >= total {
            trace!("Index {} out of range (count {})", index, total);
            return None;
        }

        let desired_offset = page_start(index, self.batch_size);
        let on_page = self
            .window
            .as_ref()
            .is_some_and(|window| window.offset() == desired_offset);

        if on_page {
            trace!("Window hit for index {}", index);
        } else if !self.load_page(desired_offset) {
            return None;
        }

        let item = self.window.as_ref().and_then(|window| window.get(index));
        if item.is_none() {
            debug!(
                "Index {} missing from page at {}: collection shrank since last count",
                index, desired_offset
            );
        }
        item
    }

    /// Item at `index` if it is already materialized, without fetching
    pub fn peek(&self, index: usize) -> Option<&S::Item> {
        self.window.as_ref().and_then(|window| window.get(index))
    }

    /// Whether `item(index)` would be served without a source call
    pub fn is_cached(&self, index: usize) -> bool {
        self.window
            .as_ref()
            .is_some_and(|window| window.contains(index))
    }

    /// Drop the window and the cached count
    ///
    /// Nothing is refetched here; the next `count()` / `item()` repopulates.
    pub fn invalidate(&mut self) {
        debug!(
            "Invalidating collection cache (offset {}, {} items, count {:?})",
            self.offset(),
            self.window_len(),
            self.total_count
        );
        self.window = None;
        self.total_count = None;
    }

    /// Switch to a different query and invalidate everything cached
    ///
    /// Always a full reset: items fetched under one ordering are never
    /// mixed with a count or page from another.
    pub fn set_query_key(&mut self, key: QueryKey) {
        debug!("Query key changed: {:?} -> {:?}", self.key, key);
        self.key = key;
        self.invalidate();
    }

    /// Current query parameters
    pub fn query_key(&self) -> &QueryKey {
        &self.key
    }

    /// Logical index of the first materialized item (0 when empty)
    pub fn offset(&self) -> usize {
        self.window.as_ref().map_or(0, Window::offset)
    }

    /// Number of materialized items
    pub fn window_len(&self) -> usize {
        self.window.as_ref().map_or(0, Window::len)
    }

    /// Cached count, or `None` if the source has not been asked yet
    pub fn cached_count(&self) -> Option<usize> {
        self.total_count
    }

    /// Page size used for every fetch
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// The injected source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consume the cache, returning the source
    pub fn into_source(self) -> S {
        self.source
    }

    /// Fetch the page at `offset` and make it the window
    ///
    /// The window is only replaced once the source answered successfully;
    /// on failure the previous window stays as it was.
    fn load_page(&mut self, offset: usize) -> bool {
        debug!(
            "Window miss: fetching {} items at offset {}",
            self.batch_size, offset
        );

        match self.source.fetch_page(offset, self.batch_size, &self.key) {
            Ok(mut items) => {
                if items.len() > self.batch_size {
                    warn!(
                        "Source returned {} items for a page of {}, truncating",
                        items.len(),
                        self.batch_size
                    );
                    items.truncate(self.batch_size);
                }
                self.window = Some(Window::new(offset, items));
                true
            }
            Err(e) => {
                warn!("Failed to fetch page at offset {}: {}", offset, e);
                false
            }
        }
    }
}

impl<S> std::fmt::Debug for WindowCache<S>
where
    S: EntitySource,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowCache")
            .field("key", &self.key)
            .field("batch_size", &self.batch_size)
            .field("offset", &self.offset())
            .field("window_len", &self.window_len())
            .field("total_count", &self.total_count)
            .finish_non_exhaustive()
    }
}
