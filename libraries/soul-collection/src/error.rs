//! Error types for collection caching

use thiserror::Error;

/// Collection errors
///
/// Only construction and configuration can fail. The read path of the
/// cache (`count`, `item`) never returns these; source failures there are
/// logged and surface as an empty count or an absent item.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// Batch size must be at least one item
    #[error("Invalid batch size: {0} (must be at least 1)")]
    InvalidBatchSize(usize),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Entity source error
    #[error("Source error: {0}")]
    Source(#[from] soul_core::SoulError),
}

/// Result type for collection operations
pub type Result<T> = std::result::Result<T, CollectionError>;
