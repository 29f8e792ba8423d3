use soul_collection::{CacheConfig, VecSource, WindowCache};
use soul_core::{Album, ParentKind, SortCriterion};
use std::sync::{Arc, Once};
use std::time::Duration;

static INIT: Once = Once::new();

pub fn init_tracing() {
    // Initialize logging once
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Album `i` is titled "Album {i:04}", released in `1970 + i % 50`,
/// lasts `i` minutes and belongs to artist `i % 5`
pub fn album(i: usize) -> Album {
    let mut album = Album::new(i as i64, format!("Album {:04}", i));
    album.release_year = Some(1970 + (i % 50) as u32);
    album.duration = Duration::from_secs(60 * i as u64);
    album.main_artist_id = Some((i % 5) as i64);
    album.main_artist = Some(format!("Artist {}", i % 5));
    album.nb_tracks = (i % 12) as u32 + 1;
    album
}

/// Shared album store with title, duration and release-date orderings,
/// title filtering and artist scoping
pub fn album_source(count: usize) -> Arc<VecSource<Album>> {
    Arc::new(
        VecSource::new((0..count).map(album).collect())
            .with_sort(SortCriterion::Alpha, |a, b| a.title.cmp(&b.title))
            .with_sort(SortCriterion::Duration, |a, b| a.duration.cmp(&b.duration))
            .with_sort(SortCriterion::ReleaseDate, |a, b| {
                a.release_year.cmp(&b.release_year).then(a.id.cmp(&b.id))
            })
            .with_pattern_filter(|album, pattern| album.title.contains(pattern))
            .with_parent_filter(|album, parent| {
                parent.kind == ParentKind::Artist && album.main_artist_id == Some(parent.id)
            }),
    )
}

pub fn album_cache(
    source: &Arc<VecSource<Album>>,
    batch_size: usize,
) -> WindowCache<Arc<VecSource<Album>>> {
    init_tracing();
    WindowCache::new(
        Arc::clone(source),
        CacheConfig::with_batch_size(batch_size).expect("valid batch size"),
    )
    .expect("cache construction")
}
