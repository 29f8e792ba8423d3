//! Genre types

use serde::{Deserialize, Serialize};

pub type GenreId = i64;

/// A music genre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
    pub nb_tracks: u32,
}

impl Genre {
    pub fn new(id: GenreId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            nb_tracks: 0,
        }
    }
}
