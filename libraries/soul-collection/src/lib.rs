//! Soul Player - Library Collections
//!
//! Lazy, paginated caching for every on-screen library list (albums,
//! artists, genres, tracks, shows).
//!
//! This crate provides:
//! - A sliding window cache that materializes one page of a collection at
//!   a time from a slow paged source
//! - Cached total counts, invalidated as a whole on sort, filter or scope
//!   changes
//! - Role tables mapping list columns to sort criteria
//! - A collection view adapter exposing row count and per-role row data
//! - An in-memory source for tests and demos
//!
//! # Architecture
//!
//! `soul-collection` knows nothing about the store behind a list:
//! - No dependency on soul-storage (database)
//! - No dependency on Tauri (desktop UI)
//!
//! The store is provided through the [`EntitySource`](soul_core::EntitySource)
//! trait and injected at construction.
//!
//! # Example: Random Access
//!
//! ```rust
//! use soul_collection::{CacheConfig, VecSource, WindowCache};
//!
//! let source = VecSource::new((0..250).collect::<Vec<u32>>());
//! let mut cache = WindowCache::new(source, CacheConfig::with_batch_size(100)?)?;
//!
//! assert_eq!(cache.count(), 250);
//! assert_eq!(cache.item(0), Some(&0));     // fetches [0, 100)
//! assert_eq!(cache.item(99), Some(&99));   // hit
//! assert_eq!(cache.item(240), Some(&240)); // fetches [200, 250)
//! assert_eq!(cache.item(250), None);       // out of range, no fetch
//! assert_eq!(cache.source().page_fetches(), 2);
//! # Ok::<(), soul_collection::CollectionError>(())
//! ```
//!
//! # Example: List View
//!
//! ```rust
//! use soul_collection::{AlbumRole, CacheConfig, CollectionView, RoleValue, VecSource};
//! use soul_core::{Album, SortCriterion};
//!
//! let source = VecSource::new(vec![Album::new(1, "Moon Safari"), Album::new(2, "Kid A")])
//!     .with_sort(SortCriterion::Alpha, |a, b| a.title.cmp(&b.title));
//! let mut view = CollectionView::new(source, CacheConfig::default())?;
//!
//! view.set_sort_role(Some(AlbumRole::Title));
//! assert_eq!(view.row_count(), 2);
//! assert_eq!(
//!     view.data(0, AlbumRole::Title),
//!     Some(RoleValue::Text("Kid A".to_string()))
//! );
//! # Ok::<(), soul_collection::CollectionError>(())
//! ```

mod cache;
mod config;
mod error;
mod events;
mod memory;
pub mod roles;
mod view;
mod window;

// Public exports
pub use cache::WindowCache;
pub use config::{CacheConfig, ENV_PREFIX};
pub use error::{CollectionError, Result};
pub use events::ViewEvent;
pub use memory::VecSource;
pub use roles::{
    AlbumRole, ArtistRole, GenreRole, ListEntity, RoleValue, ShowRole, TrackRole,
};
pub use view::CollectionView;
