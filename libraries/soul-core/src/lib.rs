//! Soul Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Soul Player.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Album`, `Artist`, `Genre`, `Track`, `Show`
//! - **Query Keys**: `QueryKey`, `SortCriterion`, `ParentScope`
//! - **Core Traits**: `EntitySource`, the paged query interface every list is backed by
//! - **Error Handling**: Unified `SoulError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use soul_core::types::{ParentScope, QueryKey, SortCriterion};
//!
//! // Tracks of album 42, longest first
//! let key = QueryKey::new()
//!     .with_sort(SortCriterion::Duration)
//!     .with_descending(true)
//!     .with_parent(Some(ParentScope::album(42)));
//!
//! assert_eq!(key.parent.map(|p| p.id), Some(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SoulError};
pub use traits::EntitySource;

pub use types::{
    Album, AlbumId, Artist, ArtistId, Genre, GenreId, ParentKind, ParentScope, QueryKey, Show,
    ShowId, SortCriterion, Track, TrackId,
};
