/// Core traits for Soul Player
use crate::error::Result;
use crate::types::QueryKey;
use std::rc::Rc;
use std::sync::Arc;

/// Paged entity source
///
/// Implementers answer two questions about the ordered collection described
/// by a [`QueryKey`]: how many items it has, and which items sit in a given
/// `[offset, offset + limit)` slice of it.
///
/// Calls are synchronous and may be slow (a database round-trip). The
/// collection may change between calls, so callers must not assume that a
/// count remains valid for the pages fetched after it.
pub trait EntitySource {
    /// Item type produced by this source
    type Item;

    /// Fetch up to `limit` items starting at `offset`
    ///
    /// Returns fewer than `limit` items near the end of the collection
    /// and an empty vector past it.
    ///
    /// # Errors
    /// Returns an error if the underlying store cannot be queried
    fn fetch_page(&self, offset: usize, limit: usize, key: &QueryKey) -> Result<Vec<Self::Item>>;

    /// Count the items of the collection
    ///
    /// # Errors
    /// Returns an error if the underlying store cannot be queried
    fn fetch_count(&self, key: &QueryKey) -> Result<usize>;
}

impl<S: EntitySource + ?Sized> EntitySource for &S {
    type Item = S::Item;

    fn fetch_page(&self, offset: usize, limit: usize, key: &QueryKey) -> Result<Vec<Self::Item>> {
        (**self).fetch_page(offset, limit, key)
    }

    fn fetch_count(&self, key: &QueryKey) -> Result<usize> {
        (**self).fetch_count(key)
    }
}

impl<S: EntitySource + ?Sized> EntitySource for Box<S> {
    type Item = S::Item;

    fn fetch_page(&self, offset: usize, limit: usize, key: &QueryKey) -> Result<Vec<Self::Item>> {
        (**self).fetch_page(offset, limit, key)
    }

    fn fetch_count(&self, key: &QueryKey) -> Result<usize> {
        (**self).fetch_count(key)
    }
}

impl<S: EntitySource + ?Sized> EntitySource for Rc<S> {
    type Item = S::Item;

    fn fetch_page(&self, offset: usize, limit: usize, key: &QueryKey) -> Result<Vec<Self::Item>> {
        (**self).fetch_page(offset, limit, key)
    }

    fn fetch_count(&self, key: &QueryKey) -> Result<usize> {
        (**self).fetch_count(key)
    }
}

impl<S: EntitySource + ?Sized> EntitySource for Arc<S> {
    type Item = S::Item;

    fn fetch_page(&self, offset: usize, limit: usize, key: &QueryKey) -> Result<Vec<Self::Item>> {
        (**self).fetch_page(offset, limit, key)
    }

    fn fetch_count(&self, key: &QueryKey) -> Result<usize> {
        (**self).fetch_count(key)
    }
}
