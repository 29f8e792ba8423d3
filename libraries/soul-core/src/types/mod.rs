mod album;
mod artist;
mod genre;
mod query;
mod show;
mod track;

pub use album::{Album, AlbumId};
pub use artist::{Artist, ArtistId};
pub use genre::{Genre, GenreId};
pub use query::{ParentKind, ParentScope, QueryKey, SortCriterion};
pub use show::{Show, ShowId};
pub use track::{Track, TrackId};
