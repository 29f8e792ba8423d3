//! Track types

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub type TrackId = i64;

/// An audio track, as listed under an album, artist or genre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub cover: Option<String>,
    pub track_number: Option<u32>,
    pub duration: Duration,
}

impl Track {
    pub fn new(id: TrackId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cover: None,
            track_number: None,
            duration: Duration::ZERO,
        }
    }
}
