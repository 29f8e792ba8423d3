//! Show types

use serde::{Deserialize, Serialize};

pub type ShowId = i64;

/// A TV show (a parent of episode media)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: ShowId,
    pub title: String,
    pub release_year: Option<u32>,
    pub nb_episodes: u32,
}

impl Show {
    pub fn new(id: ShowId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            release_year: None,
            nb_episodes: 0,
        }
    }
}
