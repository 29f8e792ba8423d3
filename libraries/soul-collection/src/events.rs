//! Collection view events
//!
//! Emitted when the rows a frontend shows are no longer valid, so it can
//! drop its own row state and re-query `row_count()`.

use serde::{Deserialize, Serialize};

/// Events emitted by a collection view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEvent {
    /// Every row changed: count and contents must be re-read
    Reset,

    /// The list is now ordered by another role
    SortRoleChanged {
        /// Name of the new sort role (`None` = default order)
        role: Option<String>,
    },
}
