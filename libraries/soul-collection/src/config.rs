//! Window cache configuration

use crate::error::{CollectionError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix (`SOUL_COLLECTION_BATCH_SIZE=...`)
pub const ENV_PREFIX: &str = "SOUL_COLLECTION";

/// Configuration for a window cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Items fetched per page, and the size of the window (default: 100)
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl CacheConfig {
    /// Configuration with the given batch size
    ///
    /// # Errors
    /// Returns `InvalidBatchSize` if `batch_size` is zero
    pub fn with_batch_size(batch_size: usize) -> Result<Self> {
        let config = Self { batch_size };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an optional TOML file and the environment
    ///
    /// Values from `SOUL_COLLECTION_*` variables override the file; missing
    /// keys fall back to defaults. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            if path.exists() {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            } else {
                tracing::debug!("Collection config {:?} not found, using defaults", path);
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        );

        let config: Self = settings
            .build()
            .map_err(|e| CollectionError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CollectionError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(CollectionError::InvalidBatchSize(self.batch_size));
        }
        Ok(())
    }
}

fn default_batch_size() -> usize {
    100
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    // Every `load` reads the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    const BATCH_SIZE_VAR: &str = "SOUL_COLLECTION_BATCH_SIZE";

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_batch_size_is_100() {
        assert_eq!(CacheConfig::default().batch_size, 100);
        assert!(CacheConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_batch_size_rejected() {
        let err = CacheConfig::with_batch_size(0).unwrap_err();
        assert!(matches!(err, CollectionError::InvalidBatchSize(0)));
    }

    #[test]
    fn explicit_batch_size_accepted() {
        assert_eq!(CacheConfig::with_batch_size(20).unwrap().batch_size, 20);
    }

    #[test]
    fn load_from_file() {
        let _env = env_lock();
        let file = toml_file("batch_size = 25\n");
        let config = CacheConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.batch_size, 25);
    }

    #[test]
    fn load_missing_key_uses_default() {
        let _env = env_lock();
        let file = toml_file("# nothing configured\n");
        let config = CacheConfig::load(Some(file.path())).unwrap();
        assert_eq!(config, CacheConfig::default());
    }

    #[test]
    fn load_missing_file_uses_default() {
        let _env = env_lock();
        let config = CacheConfig::load(Some(Path::new("/nonexistent/collection.toml"))).unwrap();
        assert_eq!(config, CacheConfig::default());
    }

    #[test]
    fn load_rejects_zero_batch() {
        let _env = env_lock();
        let file = toml_file("batch_size = 0\n");
        let err = CacheConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, CollectionError::InvalidBatchSize(0)));
    }

    #[test]
    fn load_rejects_malformed_file() {
        let _env = env_lock();
        let file = toml_file("batch_size = \"lots\"\n");
        let err = CacheConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, CollectionError::Config(_)));
    }

    #[test]
    fn env_overrides_file() {
        let _env = env_lock();
        let file = toml_file("batch_size = 25\n");

        std::env::set_var(BATCH_SIZE_VAR, "7");
        let config = CacheConfig::load(Some(file.path()));
        std::env::remove_var(BATCH_SIZE_VAR);

        assert_eq!(config.unwrap().batch_size, 7);
    }

    #[test]
    fn env_without_file() {
        let _env = env_lock();

        std::env::set_var(BATCH_SIZE_VAR, "40");
        let config = CacheConfig::load(None);
        std::env::remove_var(BATCH_SIZE_VAR);

        assert_eq!(config.unwrap().batch_size, 40);
    }

    #[test]
    fn env_zero_batch_rejected() {
        let _env = env_lock();
        let file = toml_file("batch_size = 25\n");

        std::env::set_var(BATCH_SIZE_VAR, "0");
        let result = CacheConfig::load(Some(file.path()));
        std::env::remove_var(BATCH_SIZE_VAR);

        assert!(matches!(result, Err(CollectionError::InvalidBatchSize(0))));
    }
}
