//! Album types

use super::ArtistId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub type AlbumId = i64;

/// An album as shown in the album grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub release_year: Option<u32>,
    pub short_summary: Option<String>,
    pub cover: Option<String>,
    pub main_artist: Option<String>, // Denormalized
    pub main_artist_id: Option<ArtistId>,
    pub nb_tracks: u32,
    pub duration: Duration,
}

impl Album {
    /// Create an album with only a title, everything else empty
    pub fn new(id: AlbumId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            release_year: None,
            short_summary: None,
            cover: None,
            main_artist: None,
            main_artist_id: None,
            nb_tracks: 0,
            duration: Duration::ZERO,
        }
    }
}
