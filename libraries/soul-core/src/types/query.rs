//! Query parameters shared by every paged library listing
//!
//! A [`QueryKey`] fully describes *which* ordered collection is being listed:
//! sort criterion and direction, an optional text pattern, and an optional
//! parent entity the listing is scoped to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sorting criteria understood by the media library
///
/// `Default` depends on the entity type: track number (and disc number)
/// for album tracks, alphabetical order for everything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCriterion {
    #[default]
    Default,
    Alpha,
    Duration,
    InsertionDate,
    LastModificationDate,
    ReleaseDate,
    FileSize,
    Artist,
    PlayCount,
    Album,
    Filename,
    TrackNumber,
}

/// Kind of entity a listing can be scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentKind {
    Album,
    Artist,
    Show,
    Genre,
}

/// Restricts a listing to the children of one entity
/// (e.g. the tracks of album 42)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParentScope {
    pub kind: ParentKind,
    pub id: i64,
}

impl ParentScope {
    pub fn new(kind: ParentKind, id: i64) -> Self {
        Self { kind, id }
    }

    pub fn album(id: i64) -> Self {
        Self::new(ParentKind::Album, id)
    }

    pub fn artist(id: i64) -> Self {
        Self::new(ParentKind::Artist, id)
    }

    pub fn show(id: i64) -> Self {
        Self::new(ParentKind::Show, id)
    }

    pub fn genre(id: i64) -> Self {
        Self::new(ParentKind::Genre, id)
    }
}

impl fmt::Display for ParentScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{}", self.kind, self.id)
    }
}

/// Parameters of a paged listing
///
/// Offset and limit are deliberately *not* part of the key: they are chosen
/// per call by whoever pages through the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryKey {
    pub sort: SortCriterion,
    pub descending: bool,
    pub pattern: Option<String>,
    pub parent: Option<ParentScope>,
}

impl QueryKey {
    /// Whole-library listing with the default ordering
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(mut self, sort: SortCriterion) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_descending(mut self, descending: bool) -> Self {
        self.descending = descending;
        self
    }

    /// Set the filter pattern; an empty pattern clears the filter
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = normalize_pattern(pattern.into());
        self
    }

    /// Remove the filter pattern
    pub fn without_pattern(mut self) -> Self {
        self.pattern = None;
        self
    }

    pub fn with_parent(mut self, parent: Option<ParentScope>) -> Self {
        self.parent = parent;
        self
    }

    /// Pattern as a plain string slice, if any
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }
}

fn normalize_pattern(pattern: String) -> Option<String> {
    if pattern.is_empty() {
        None
    } else {
        Some(pattern)
    }
}
