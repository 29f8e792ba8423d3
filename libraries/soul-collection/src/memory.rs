//! In-memory entity source
//!
//! Backs a list with a plain `Vec` instead of the media library database.
//! The vector sits behind a lock so the store can be mutated while a cache
//! holds a handle to it, which is exactly the situation a stale count
//! arises from.

use soul_core::{EntitySource, ParentScope, QueryKey, Result, SoulError, SortCriterion};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{PoisonError, RwLock};

type PatternFilter<T> = Box<dyn Fn(&T, &str) -> bool + Send + Sync>;
type ParentFilter<T> = Box<dyn Fn(&T, &ParentScope) -> bool + Send + Sync>;
type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// `Vec`-backed [`EntitySource`]
///
/// Query semantics:
/// - `pattern` keeps items accepted by the pattern filter (all items if no
///   filter was registered)
/// - `parent` keeps items accepted by the parent filter (no items if no
///   parent filter was registered)
/// - `sort` applies the comparator registered for that criterion; criteria
///   without one keep insertion order
/// - `descending` reverses the result
pub struct VecSource<T> {
    items: RwLock<Vec<T>>,
    pattern_filter: Option<PatternFilter<T>>,
    parent_filter: Option<ParentFilter<T>>,
    comparators: HashMap<SortCriterion, Comparator<T>>,
    page_fetches: AtomicUsize,
    count_fetches: AtomicUsize,
    failures_pending: AtomicUsize,
}

impl<T: Clone> VecSource<T> {
    /// Create a source over `items`, in the given order
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            pattern_filter: None,
            parent_filter: None,
            comparators: HashMap::new(),
            page_fetches: AtomicUsize::new(0),
            count_fetches: AtomicUsize::new(0),
            failures_pending: AtomicUsize::new(0),
        }
    }

    /// Register how a filter pattern selects items
    pub fn with_pattern_filter(
        mut self,
        filter: impl Fn(&T, &str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.pattern_filter = Some(Box::new(filter));
        self
    }

    /// Register how a parent scope selects items
    pub fn with_parent_filter(
        mut self,
        filter: impl Fn(&T, &ParentScope) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.parent_filter = Some(Box::new(filter));
        self
    }

    /// Register the ordering for a sort criterion
    pub fn with_sort(
        mut self,
        criterion: SortCriterion,
        compare: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.comparators.insert(criterion, Box::new(compare));
        self
    }

    /// Append an item to the store
    pub fn push(&self, item: T) {
        self.write().push(item);
    }

    /// Remove the item at `index` (insertion order), if present
    pub fn remove(&self, index: usize) -> Option<T> {
        let mut items = self.write();
        (index < items.len()).then(|| items.remove(index))
    }

    /// Replace the whole store
    pub fn replace(&self, items: Vec<T>) {
        *self.write() = items;
    }

    /// Number of stored items, ignoring any query
    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make the next `n` source calls (page or count) fail
    pub fn fail_next(&self, n: usize) {
        self.failures_pending.store(n, AtomicOrdering::SeqCst);
    }

    /// Number of `fetch_page` calls received so far
    pub fn page_fetches(&self) -> usize {
        self.page_fetches.load(AtomicOrdering::SeqCst)
    }

    /// Number of `fetch_count` calls received so far
    pub fn count_fetches(&self) -> usize {
        self.count_fetches.load(AtomicOrdering::SeqCst)
    }

    /// Reset both fetch counters
    pub fn reset_counters(&self) {
        self.page_fetches.store(0, AtomicOrdering::SeqCst);
        self.count_fetches.store(0, AtomicOrdering::SeqCst);
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<T>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn take_failure(&self) -> Result<()> {
        let pending = self.failures_pending.fetch_update(
            AtomicOrdering::SeqCst,
            AtomicOrdering::SeqCst,
            |n| n.checked_sub(1),
        );
        match pending {
            Ok(_) => Err(SoulError::source_unavailable("in-memory source offline")),
            Err(_) => Ok(()),
        }
    }

    /// Evaluate `key` against the store
    fn select(&self, key: &QueryKey) -> Result<Vec<T>> {
        let items = self
            .items
            .read()
            .map_err(|_| SoulError::storage("in-memory store lock poisoned"))?;

        let mut selected: Vec<&T> = items
            .iter()
            .filter(|item| match (key.pattern(), &self.pattern_filter) {
                (Some(pattern), Some(filter)) => filter(item, pattern),
                _ => true,
            })
            .filter(|item| match (&key.parent, &self.parent_filter) {
                (Some(parent), Some(filter)) => filter(item, parent),
                (Some(_), None) => false,
                (None, _) => true,
            })
            .collect();

        if let Some(compare) = self.comparators.get(&key.sort) {
            selected.sort_by(|a, b| compare(a, b));
        }
        if key.descending {
            selected.reverse();
        }

        Ok(selected.into_iter().cloned().collect())
    }
}

impl<T: Clone> EntitySource for VecSource<T> {
    type Item = T;

    fn fetch_page(&self, offset: usize, limit: usize, key: &QueryKey) -> Result<Vec<T>> {
        self.page_fetches.fetch_add(1, AtomicOrdering::SeqCst);
        self.take_failure()?;

        Ok(self
            .select(key)?
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect())
    }

    fn fetch_count(&self, key: &QueryKey) -> Result<usize> {
        self.count_fetches.fetch_add(1, AtomicOrdering::SeqCst);
        self.take_failure()?;

        Ok(self.select(key)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soul_core::ParentKind;

    #[derive(Debug, Clone, PartialEq)]
    struct Song {
        id: i64,
        title: &'static str,
        secs: u32,
        album: i64,
    }

    fn songs() -> VecSource<Song> {
        VecSource::new(vec![
            Song { id: 1, title: "Kids", secs: 302, album: 10 },
            Song { id: 2, title: "Alone", secs: 185, album: 10 },
            Song { id: 3, title: "Time to Pretend", secs: 261, album: 20 },
            Song { id: 4, title: "Electric Feel", secs: 229, album: 20 },
        ])
        .with_pattern_filter(|song, pattern| {
            song.title.to_lowercase().contains(&pattern.to_lowercase())
        })
        .with_parent_filter(|song, parent| parent.kind == ParentKind::Album && song.album == parent.id)
        .with_sort(SortCriterion::Alpha, |a, b| a.title.cmp(b.title))
        .with_sort(SortCriterion::Duration, |a, b| a.secs.cmp(&b.secs))
    }

    fn ids(items: &[Song]) -> Vec<i64> {
        items.iter().map(|s| s.id).collect()
    }

    #[test]
    fn default_sort_keeps_insertion_order() {
        let source = songs();
        let page = source.fetch_page(0, 10, &QueryKey::new()).unwrap();
        assert_eq!(ids(&page), vec![1, 2, 3, 4]);
    }

    #[test]
    fn sort_and_direction() {
        let source = songs();
        let key = QueryKey::new().with_sort(SortCriterion::Duration);
        assert_eq!(ids(&source.fetch_page(0, 10, &key).unwrap()), vec![2, 4, 3, 1]);

        let key = key.with_descending(true);
        assert_eq!(ids(&source.fetch_page(0, 10, &key).unwrap()), vec![1, 3, 4, 2]);
    }

    #[test]
    fn offset_and_limit_slice_the_result() {
        let source = songs();
        let key = QueryKey::new().with_sort(SortCriterion::Alpha);
        assert_eq!(ids(&source.fetch_page(1, 2, &key).unwrap()), vec![4, 1]);
        assert_eq!(ids(&source.fetch_page(3, 2, &key).unwrap()), vec![3]);
        assert!(source.fetch_page(10, 2, &key).unwrap().is_empty());
    }

    #[test]
    fn pattern_and_parent_filter() {
        let source = songs();
        let key = QueryKey::new().with_pattern("e");
        assert_eq!(source.fetch_count(&key).unwrap(), 3);

        let key = QueryKey::new().with_parent(Some(ParentScope::album(20)));
        assert_eq!(ids(&source.fetch_page(0, 10, &key).unwrap()), vec![3, 4]);
    }

    #[test]
    fn parent_without_filter_selects_nothing() {
        let source = VecSource::new(vec![1, 2, 3]);
        let key = QueryKey::new().with_parent(Some(ParentScope::genre(1)));
        assert_eq!(source.fetch_count(&key).unwrap(), 0);
    }

    #[test]
    fn injected_failures_are_consumed() {
        let source = songs();
        source.fail_next(2);
        assert!(source.fetch_count(&QueryKey::new()).is_err());
        assert!(source.fetch_page(0, 1, &QueryKey::new()).is_err());
        assert_eq!(source.fetch_count(&QueryKey::new()).unwrap(), 4);
        assert_eq!(source.count_fetches(), 2);
        assert_eq!(source.page_fetches(), 1);
    }

    #[test]
    fn mutation_is_visible_to_queries() {
        let source = songs();
        source.push(Song { id: 5, title: "Weekend Wars", secs: 252, album: 10 });
        assert_eq!(source.fetch_count(&QueryKey::new()).unwrap(), 5);

        assert_eq!(source.remove(0).map(|s| s.id), Some(1));
        assert_eq!(source.remove(99), None);
        assert_eq!(source.len(), 4);

        source.replace(Vec::new());
        assert!(source.is_empty());
    }

    #[test]
    fn counters_reset() {
        let source = songs();
        source.fetch_count(&QueryKey::new()).unwrap();
        source.fetch_page(0, 1, &QueryKey::new()).unwrap();
        source.reset_counters();
        assert_eq!(source.page_fetches(), 0);
        assert_eq!(source.count_fetches(), 0);
    }
}
