//! Artist types

use serde::{Deserialize, Serialize};

pub type ArtistId = i64;

/// An artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub short_bio: Option<String>,
    pub cover: Option<String>,
    pub nb_albums: u32,
}

impl Artist {
    /// Create an artist with only a name
    pub fn new(id: ArtistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            short_bio: None,
            cover: None,
            nb_albums: 0,
        }
    }
}
