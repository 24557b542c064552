use crate::common::{DEFAULT_LANGUAGE, DEFAULT_STORAGE_LOCATION};

/// Configuration for an in-memory engine.
///
/// The engine stamps every inserted row with a storage location and a
/// language unless the document already carries them.
///
/// ```text
/// let config = InMemoryEngineConfig::new().storage_location(12).language(1);
/// let engine = InMemoryEngine::with_config(config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryEngineConfig {
    storage_location: u64,
    language: i64,
}

impl Default for InMemoryEngineConfig {
    fn default() -> Self {
        InMemoryEngineConfig::new()
    }
}

impl InMemoryEngineConfig {
    pub fn new() -> InMemoryEngineConfig {
        InMemoryEngineConfig {
            storage_location: DEFAULT_STORAGE_LOCATION,
            language: DEFAULT_LANGUAGE,
        }
    }

    pub fn storage_location(mut self, storage_location: u64) -> InMemoryEngineConfig {
        self.storage_location = storage_location;
        self
    }

    pub fn language(mut self, language: i64) -> InMemoryEngineConfig {
        self.language = language;
        self
    }

    pub fn get_storage_location(&self) -> u64 {
        self.storage_location
    }

    pub fn get_language(&self) -> i64 {
        self.language
    }
}
