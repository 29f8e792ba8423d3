//! List roles for library entities
//!
//! A role is one displayable attribute of a list row ("title", "duration").
//! Each entity declares its roles, the stable name a frontend binds to, and
//! which sort criterion ordering by that role maps to.

use serde::Serialize;
use soul_core::types::{Album, Artist, Genre, Show, Track};
use soul_core::SortCriterion;
use std::fmt;
use std::time::Duration;

/// Value of one role of one row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RoleValue {
    /// Entity identifier
    Id(i64),
    /// Counts, years, numbers
    Int(i64),
    /// Titles, names, summaries, cover paths
    Text(String),
    /// Durations, in milliseconds
    DurationMs(u64),
    /// Attribute not set for this entity
    Empty,
}

impl RoleValue {
    fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }

    fn optional_text(value: Option<&String>) -> Self {
        value.map_or(Self::Empty, |s| Self::text(s))
    }

    fn optional_int(value: Option<u32>) -> Self {
        value.map_or(Self::Empty, |v| Self::Int(i64::from(v)))
    }

    fn duration(value: Duration) -> Self {
        Self::DurationMs(value.as_millis() as u64)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<RoleValue> for serde_json::Value {
    fn from(value: RoleValue) -> Self {
        match value {
            RoleValue::Id(v) | RoleValue::Int(v) => Self::from(v),
            RoleValue::Text(s) => Self::from(s),
            RoleValue::DurationMs(ms) => Self::from(ms),
            RoleValue::Empty => Self::Null,
        }
    }
}

/// An entity that can be shown as a row of a library list
pub trait ListEntity {
    /// Role enumeration of this entity
    type Role: Copy + Eq + fmt::Debug + 'static;

    /// Every role, in display order
    fn roles() -> &'static [Self::Role];

    /// Stable name of `role`, as bound by the frontend
    fn role_name(role: Self::Role) -> &'static str;

    /// Role with the given name
    fn role_from_name(name: &str) -> Option<Self::Role> {
        Self::roles()
            .iter()
            .copied()
            .find(|role| Self::role_name(*role) == name)
    }

    /// Sort criterion used when the list is ordered by `role`
    fn sort_criterion(role: Self::Role) -> SortCriterion;

    /// Value of `role` for this row
    fn value(&self, role: Self::Role) -> RoleValue;
}

// ===== Albums =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlbumRole {
    Id,
    Title,
    ReleaseYear,
    ShortSummary,
    Cover,
    MainArtist,
    NbTracks,
    Duration,
}

impl ListEntity for Album {
    type Role = AlbumRole;

    fn roles() -> &'static [AlbumRole] {
        &[
            AlbumRole::Id,
            AlbumRole::Title,
            AlbumRole::ReleaseYear,
            AlbumRole::ShortSummary,
            AlbumRole::Cover,
            AlbumRole::MainArtist,
            AlbumRole::NbTracks,
            AlbumRole::Duration,
        ]
    }

    fn role_name(role: AlbumRole) -> &'static str {
        match role {
            AlbumRole::Id => "id",
            AlbumRole::Title => "title",
            AlbumRole::ReleaseYear => "release_year",
            AlbumRole::ShortSummary => "shortsummary",
            AlbumRole::Cover => "cover",
            AlbumRole::MainArtist => "main_artist",
            AlbumRole::NbTracks => "nb_tracks",
            AlbumRole::Duration => "duration",
        }
    }

    fn sort_criterion(role: AlbumRole) -> SortCriterion {
        match role {
            AlbumRole::Title => SortCriterion::Alpha,
            AlbumRole::ReleaseYear => SortCriterion::ReleaseDate,
            AlbumRole::MainArtist => SortCriterion::Artist,
            AlbumRole::Duration => SortCriterion::Duration,
            _ => SortCriterion::Default,
        }
    }

    fn value(&self, role: AlbumRole) -> RoleValue {
        match role {
            AlbumRole::Id => RoleValue::Id(self.id),
            AlbumRole::Title => RoleValue::text(&self.title),
            AlbumRole::ReleaseYear => RoleValue::optional_int(self.release_year),
            AlbumRole::ShortSummary => RoleValue::optional_text(self.short_summary.as_ref()),
            AlbumRole::Cover => RoleValue::optional_text(self.cover.as_ref()),
            AlbumRole::MainArtist => RoleValue::optional_text(self.main_artist.as_ref()),
            AlbumRole::NbTracks => RoleValue::Int(i64::from(self.nb_tracks)),
            AlbumRole::Duration => RoleValue::duration(self.duration),
        }
    }
}

// ===== Artists =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtistRole {
    Id,
    Name,
    ShortBio,
    Cover,
    NbAlbums,
}

impl ListEntity for Artist {
    type Role = ArtistRole;

    fn roles() -> &'static [ArtistRole] {
        &[
            ArtistRole::Id,
            ArtistRole::Name,
            ArtistRole::ShortBio,
            ArtistRole::Cover,
            ArtistRole::NbAlbums,
        ]
    }

    fn role_name(role: ArtistRole) -> &'static str {
        match role {
            ArtistRole::Id => "id",
            ArtistRole::Name => "name",
            ArtistRole::ShortBio => "short_bio",
            ArtistRole::Cover => "cover",
            ArtistRole::NbAlbums => "nb_albums",
        }
    }

    fn sort_criterion(role: ArtistRole) -> SortCriterion {
        match role {
            ArtistRole::Name => SortCriterion::Alpha,
            _ => SortCriterion::Default,
        }
    }

    fn value(&self, role: ArtistRole) -> RoleValue {
        match role {
            ArtistRole::Id => RoleValue::Id(self.id),
            ArtistRole::Name => RoleValue::text(&self.name),
            ArtistRole::ShortBio => RoleValue::optional_text(self.short_bio.as_ref()),
            ArtistRole::Cover => RoleValue::optional_text(self.cover.as_ref()),
            ArtistRole::NbAlbums => RoleValue::Int(i64::from(self.nb_albums)),
        }
    }
}

// ===== Genres =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenreRole {
    Id,
    Name,
    NbTracks,
}

impl ListEntity for Genre {
    type Role = GenreRole;

    fn roles() -> &'static [GenreRole] {
        &[GenreRole::Id, GenreRole::Name, GenreRole::NbTracks]
    }

    fn role_name(role: GenreRole) -> &'static str {
        match role {
            GenreRole::Id => "id",
            GenreRole::Name => "name",
            GenreRole::NbTracks => "nb_tracks",
        }
    }

    fn sort_criterion(role: GenreRole) -> SortCriterion {
        match role {
            GenreRole::Name => SortCriterion::Alpha,
            _ => SortCriterion::Default,
        }
    }

    fn value(&self, role: GenreRole) -> RoleValue {
        match role {
            GenreRole::Id => RoleValue::Id(self.id),
            GenreRole::Name => RoleValue::text(&self.name),
            GenreRole::NbTracks => RoleValue::Int(i64::from(self.nb_tracks)),
        }
    }
}

// ===== Tracks =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackRole {
    Id,
    Title,
    Cover,
    Number,
    Duration,
}

impl ListEntity for Track {
    type Role = TrackRole;

    fn roles() -> &'static [TrackRole] {
        &[
            TrackRole::Id,
            TrackRole::Title,
            TrackRole::Cover,
            TrackRole::Number,
            TrackRole::Duration,
        ]
    }

    fn role_name(role: TrackRole) -> &'static str {
        match role {
            TrackRole::Id => "id",
            TrackRole::Title => "title",
            TrackRole::Cover => "cover",
            TrackRole::Number => "number",
            TrackRole::Duration => "duration",
        }
    }

    fn sort_criterion(role: TrackRole) -> SortCriterion {
        match role {
            TrackRole::Title => SortCriterion::Alpha,
            TrackRole::Number => SortCriterion::TrackNumber,
            TrackRole::Duration => SortCriterion::Duration,
            _ => SortCriterion::Default,
        }
    }

    fn value(&self, role: TrackRole) -> RoleValue {
        match role {
            TrackRole::Id => RoleValue::Id(self.id),
            TrackRole::Title => RoleValue::text(&self.title),
            TrackRole::Cover => RoleValue::optional_text(self.cover.as_ref()),
            TrackRole::Number => RoleValue::optional_int(self.track_number),
            TrackRole::Duration => RoleValue::duration(self.duration),
        }
    }
}

// ===== Shows =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowRole {
    Id,
    Title,
    ReleaseYear,
    NbEpisodes,
}

impl ListEntity for Show {
    type Role = ShowRole;

    fn roles() -> &'static [ShowRole] {
        &[
            ShowRole::Id,
            ShowRole::Title,
            ShowRole::ReleaseYear,
            ShowRole::NbEpisodes,
        ]
    }

    fn role_name(role: ShowRole) -> &'static str {
        match role {
            ShowRole::Id => "id",
            ShowRole::Title => "title",
            ShowRole::ReleaseYear => "release_year",
            ShowRole::NbEpisodes => "nb_episodes",
        }
    }

    fn sort_criterion(role: ShowRole) -> SortCriterion {
        match role {
            ShowRole::Title => SortCriterion::Alpha,
            ShowRole::ReleaseYear => SortCriterion::ReleaseDate,
            _ => SortCriterion::Default,
        }
    }

    fn value(&self, role: ShowRole) -> RoleValue {
        match role {
            ShowRole::Id => RoleValue::Id(self.id),
            ShowRole::Title => RoleValue::text(&self.title),
            ShowRole::ReleaseYear => RoleValue::optional_int(self.release_year),
            ShowRole::NbEpisodes => RoleValue::Int(i64::from(self.nb_episodes)),
        }
    }
}
