// document constants
pub const DOC_NAMESPACE: &str = "namespace";
pub const DOC_ID: &str = "id";
pub const DOC_UID: &str = "uid";
pub const RESERVED_FIELDS: [&str; 3] = [DOC_NAMESPACE, DOC_ID, DOC_UID];

// engine column constants
pub const ENGINE_STORAGE_LOCATION: &str = "_location";
pub const ENGINE_LANGUAGE: &str = "_language";
pub const ENGINE_COLUMNS: [&str; 2] = [ENGINE_STORAGE_LOCATION, ENGINE_LANGUAGE];

// language marker for rows visible in every language
pub const ALL_LANGUAGES: i64 = -1;
pub const DEFAULT_LANGUAGE: i64 = 0;
pub const DEFAULT_STORAGE_LOCATION: u64 = 0;

// first storage identity handed out by an engine
pub const FIRST_UID: u64 = 1;

pub const DOCSPACE_VERSION: &str = env!("CARGO_PKG_VERSION");
