//! The materialized slice of a collection
//!
//! A [`Window`] is one contiguous run of items fetched from a source,
//! anchored at the logical index of its first item.

/// Contiguous, page-aligned slice of the logical collection
///
/// ```text
///  logical index:  0 ........ offset ............ offset+len ...... total
///                             [ items[0] .. items[len-1] ]
/// ```
#[derive(Debug, Clone)]
pub(crate) struct Window<T> {
    /// Logical index of `items[0]`
    offset: usize,

    /// Fetched items, in collection order
    items: Vec<T>,
}

impl<T> Window<T> {
    pub fn new(offset: usize, items: Vec<T>) -> Self {
        Self { offset, items }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `index` falls inside `[offset, offset + len)`
    pub fn contains(&self, index: usize) -> bool {
        index >= self.offset && index - self.offset < self.items.len()
    }

    /// Item at logical position `index`, if it is materialized
    pub fn get(&self, index: usize) -> Option<&T> {
        index
            .checked_sub(self.offset)
            .and_then(|relative| self.items.get(relative))
    }
}

/// Start of the page containing `index`
///
/// Pages are `[k * batch_size, (k + 1) * batch_size)`. A zero batch size
/// never reaches here (rejected by config validation) but maps to page 0.
pub(crate) fn page_start(index: usize, batch_size: usize) -> usize {
    if batch_size == 0 {
        return 0;
    }
    index - (index % batch_size)
}
