//! Collection view adapter
//!
//! Translates the window cache into what a list widget asks for: a row
//! count, and the value of a named role at a row. Sort, filter and scope
//! changes are all funneled through a full cache reset.

use crate::cache::WindowCache;
use crate::config::CacheConfig;
use crate::error::Result;
use crate::events::ViewEvent;
use crate::roles::{ListEntity, RoleValue};
use soul_core::{EntitySource, ParentScope, QueryKey, SortCriterion};
use tracing::debug;

/// Role-aware list model over a [`WindowCache`]
pub struct CollectionView<S>
where
    S: EntitySource,
    S::Item: ListEntity,
{
    cache: WindowCache<S>,

    /// Role the list is ordered by (`None` = default order)
    sort_role: Option<<S::Item as ListEntity>::Role>,

    /// Events not yet drained by the frontend
    pending_events: Vec<ViewEvent>,
}

impl<S> CollectionView<S>
where
    S: EntitySource,
    S::Item: ListEntity,
{
    /// Create a view listing the whole collection in default order
    pub fn new(source: S, config: CacheConfig) -> Result<Self> {
        Ok(Self::from_cache(WindowCache::new(source, config)?))
    }

    /// Create a view scoped to the children of `parent`
    /// (e.g. the tracks of one album)
    pub fn scoped(source: S, config: CacheConfig, parent: ParentScope) -> Result<Self> {
        let key = QueryKey::new().with_parent(Some(parent));
        Ok(Self::from_cache(WindowCache::with_key(source, config, key)?))
    }

    /// Wrap an existing cache
    pub fn from_cache(cache: WindowCache<S>) -> Self {
        Self {
            cache,
            sort_role: None,
            pending_events: Vec::new(),
        }
    }

    // ===== Rows =====

    /// Number of rows
    pub fn row_count(&mut self) -> usize {
        self.cache.count()
    }

    /// Entity shown at `row`
    ///
    /// `None` means "no data for this row yet", never an error. The count
    /// is always established before the first page is fetched (see
    /// [`WindowCache::item`]).
    pub fn get(&mut self, row: usize) -> Option<&S::Item> {
        self.cache.item(row)
    }

    /// Value of `role` at `row`
    pub fn data(&mut self, row: usize, role: <S::Item as ListEntity>::Role) -> Option<RoleValue> {
        self.get(row).map(|item| item.value(role))
    }

    /// Value of the role named `name` at `row`
    ///
    /// Unknown role names yield `None`, like an out-of-range row.
    pub fn data_by_name(&mut self, row: usize, name: &str) -> Option<RoleValue> {
        let role = <S::Item as ListEntity>::role_from_name(name)?;
        self.data(row, role)
    }

    /// Every role of `row` as `(name, value)` pairs, in display order
    pub fn row_values(&mut self, row: usize) -> Option<Vec<(&'static str, RoleValue)>> {
        let item = self.get(row)?;
        Some(
            <S::Item as ListEntity>::roles()
                .iter()
                .map(|role| (<S::Item as ListEntity>::role_name(*role), item.value(*role)))
                .collect(),
        )
    }

    /// Row as a JSON object keyed by role name
    pub fn row_json(&mut self, row: usize) -> Option<serde_json::Value> {
        let values = self.row_values(row)?;
        let object: serde_json::Map<String, serde_json::Value> = values
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.into()))
            .collect();
        Some(serde_json::Value::Object(object))
    }

    /// Names of every role, in display order
    pub fn role_names(&self) -> Vec<&'static str> {
        <S::Item as ListEntity>::roles()
            .iter()
            .map(|role| <S::Item as ListEntity>::role_name(*role))
            .collect()
    }

    // ===== Ordering & filtering =====

    /// Role the list is currently ordered by
    pub fn sort_role(&self) -> Option<<S::Item as ListEntity>::Role> {
        self.sort_role
    }

    /// Order the list by `role` (`None` = default order)
    pub fn set_sort_role(&mut self, role: Option<<S::Item as ListEntity>::Role>) {
        let criterion = role.map_or(SortCriterion::Default, <S::Item as ListEntity>::sort_criterion);
        self.sort_role = role;

        let key = self.cache.query_key().clone().with_sort(criterion);
        self.apply_key(key);

        self.pending_events.push(ViewEvent::SortRoleChanged {
            role: role.map(|r| <S::Item as ListEntity>::role_name(r).to_string()),
        });
    }

    /// Order the list by the role named `name`
    ///
    /// Unknown names fall back to the default order. Returns whether the
    /// name was recognized.
    pub fn set_sort_role_by_name(&mut self, name: &str) -> bool {
        let role = <S::Item as ListEntity>::role_from_name(name);
        if role.is_none() {
            debug!("Unknown sort role {:?}, using default order", name);
        }
        self.set_sort_role(role);
        role.is_some()
    }

    /// Reverse (or restore) the current order
    pub fn set_descending(&mut self, descending: bool) {
        let key = self.cache.query_key().clone().with_descending(descending);
        self.apply_key(key);
    }

    /// Filter rows by `pattern`; an empty pattern removes the filter
    pub fn set_filter(&mut self, pattern: impl Into<String>) {
        let key = self.cache.query_key().clone().with_pattern(pattern);
        self.apply_key(key);
    }

    /// Scope the list to the children of `parent` (`None` = whole library)
    pub fn set_parent(&mut self, parent: Option<ParentScope>) {
        let key = self.cache.query_key().clone().with_parent(parent);
        self.apply_key(key);
    }

    /// Current query parameters
    pub fn query_key(&self) -> &QueryKey {
        self.cache.query_key()
    }

    /// Discard every cached row (e.g. the library changed underneath)
    pub fn reload(&mut self) {
        self.cache.invalidate();
        self.pending_events.push(ViewEvent::Reset);
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events that have been emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Access =====

    /// The underlying cache
    pub fn cache(&self) -> &WindowCache<S> {
        &self.cache
    }

    /// Consume the view, returning its cache
    pub fn into_cache(self) -> WindowCache<S> {
        self.cache
    }

    fn apply_key(&mut self, key: QueryKey) {
        self.cache.set_query_key(key);
        self.pending_events.push(ViewEvent::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::VecSource;
    use crate::roles::GenreRole;
    use soul_core::Genre;

    fn genres() -> VecSource<Genre> {
        VecSource::new(vec![
            Genre::new(1, "Rock"),
            Genre::new(2, "Ambient"),
            Genre::new(3, "Jazz"),
        ])
        .with_sort(SortCriterion::Alpha, |a, b| a.name.cmp(&b.name))
    }

    fn view() -> CollectionView<VecSource<Genre>> {
        CollectionView::new(genres(), CacheConfig::with_batch_size(2).unwrap()).unwrap()
    }

    #[test]
    fn get_counts_before_fetching() {
        let mut view = view();
        assert_eq!(view.get(0).map(|g| g.id), Some(1));
        assert_eq!(view.cache().source().count_fetches(), 1);
        assert_eq!(view.cache().source().page_fetches(), 1);
    }

    #[test]
    fn get_skips_page_when_count_fails() {
        let mut view = view();
        view.cache().source().fail_next(1);

        assert!(view.get(0).is_none());
        assert_eq!(view.cache().source().count_fetches(), 1);
        assert_eq!(view.cache().source().page_fetches(), 0);

        // Next read counts once more, then fetches the page
        assert_eq!(view.get(0).map(|g| g.id), Some(1));
        assert_eq!(view.cache().source().count_fetches(), 2);
        assert_eq!(view.cache().source().page_fetches(), 1);
    }

    #[test]
    fn unknown_role_name_is_absent() {
        let mut view = view();
        assert_eq!(view.data_by_name(0, "cover"), None);
        assert_eq!(
            view.data_by_name(0, "name"),
            Some(RoleValue::Text("Rock".to_string()))
        );
    }

    #[test]
    fn sort_role_maps_to_criterion() {
        let mut view = view();
        view.set_sort_role(Some(GenreRole::Name));
        assert_eq!(view.query_key().sort, SortCriterion::Alpha);
        assert_eq!(view.sort_role(), Some(GenreRole::Name));

        view.set_sort_role(Some(GenreRole::NbTracks));
        assert_eq!(view.query_key().sort, SortCriterion::Default);
    }

    #[test]
    fn sort_change_emits_reset_then_role() {
        let mut view = view();
        view.set_sort_role(Some(GenreRole::Name));
        assert_eq!(
            view.drain_events(),
            vec![
                ViewEvent::Reset,
                ViewEvent::SortRoleChanged {
                    role: Some("name".to_string())
                }
            ]
        );
        assert!(!view.has_pending_events());
    }

    #[test]
    fn row_json_keys_by_role_name() {
        let mut view = view();
        let row = view.row_json(2).unwrap();
        assert_eq!(row["id"], 3);
        assert_eq!(row["name"], "Jazz");
        assert_eq!(row["nb_tracks"], 0);
        assert!(view.row_json(3).is_none());
    }
}
