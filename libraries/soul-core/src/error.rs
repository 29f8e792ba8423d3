/// Core error types for Soul Player
use thiserror::Error;

/// Result type alias using `SoulError`
pub type Result<T> = std::result::Result<T, SoulError>;

/// Core error type for Soul Player
#[derive(Error, Debug)]
pub enum SoulError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A paged entity source could not answer a query
    #[error("Source unavailable: {0}")]
    Source(String),
}

impl SoulError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a source-unavailable error
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_message() {
        let err = SoulError::storage("store lock poisoned");
        assert!(matches!(err, SoulError::Storage(_)));
        assert_eq!(err.to_string(), "Storage error: store lock poisoned");
    }

    #[test]
    fn source_unavailable_message() {
        let err = SoulError::source_unavailable("database is locked");
        assert!(matches!(err, SoulError::Source(_)));
        assert_eq!(err.to_string(), "Source unavailable: database is locked");
    }
}
