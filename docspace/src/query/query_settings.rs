use crate::common::{ALL_LANGUAGES, DEFAULT_LANGUAGE, DEFAULT_STORAGE_LOCATION};

/// Engine-level record-visibility switches carried by every [crate::query::Query].
///
/// The defaults describe a "mapped" query that an engine scopes by language
/// and storage location. The repository turns all three off; see
/// [QuerySettings::unrestricted].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuerySettings {
    respect_language: bool,
    language: i64,
    return_raw_rows: bool,
    respect_storage_location: bool,
    storage_locations: Vec<u64>,
}

impl Default for QuerySettings {
    fn default() -> Self {
        QuerySettings::new()
    }
}

impl QuerySettings {
    pub fn new() -> QuerySettings {
        QuerySettings {
            respect_language: true,
            language: DEFAULT_LANGUAGE,
            return_raw_rows: false,
            respect_storage_location: true,
            storage_locations: vec![DEFAULT_STORAGE_LOCATION],
        }
    }

    /// Copies these settings with every engine-level visibility filter
    /// switched off and raw rows requested. The language and storage location
    /// values are kept but no longer consulted.
    pub fn unrestricted(&self) -> QuerySettings {
        self.clone()
            .respect_language(false)
            .return_raw_rows(true)
            .respect_storage_location(false)
    }

    pub fn respect_language(mut self, respect: bool) -> QuerySettings {
        self.respect_language = respect;
        self
    }

    pub fn language(mut self, language: i64) -> QuerySettings {
        self.language = language;
        self
    }

    pub fn return_raw_rows(mut self, raw: bool) -> QuerySettings {
        self.return_raw_rows = raw;
        self
    }

    pub fn respect_storage_location(mut self, respect: bool) -> QuerySettings {
        self.respect_storage_location = respect;
        self
    }

    pub fn storage_locations(mut self, locations: Vec<u64>) -> QuerySettings {
        self.storage_locations = locations;
        self
    }

    pub fn is_language_respected(&self) -> bool {
        self.respect_language
    }

    pub fn get_language(&self) -> i64 {
        self.language
    }

    pub fn is_raw(&self) -> bool {
        self.return_raw_rows
    }

    pub fn is_storage_location_respected(&self) -> bool {
        self.respect_storage_location
    }

    pub fn get_storage_locations(&self) -> &[u64] {
        &self.storage_locations
    }

    /// Whether a record stamped with `language` is visible under these settings.
    pub fn language_visible(&self, language: i64) -> bool {
        !self.respect_language || language == self.language || language == ALL_LANGUAGES
    }

    /// Whether a record stamped with `location` is visible under these settings.
    pub fn location_visible(&self, location: u64) -> bool {
        !self.respect_storage_location || self.storage_locations.contains(&location)
    }
}
