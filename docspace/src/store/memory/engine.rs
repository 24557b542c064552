use crate::collection::Document;
use crate::common::{
    atomic, Atomic, ReadExecutor, SortOrder, Value, WriteExecutor, DEFAULT_LANGUAGE,
    DEFAULT_STORAGE_LOCATION, DOC_UID, ENGINE_COLUMNS, ENGINE_LANGUAGE, ENGINE_STORAGE_LOCATION,
    FIRST_UID,
};
use crate::errors::{DocspaceError, DocspaceResult, ErrorKind};
use crate::filter::is_all_filter;
use crate::query::{Query, QuerySettings};
use crate::store::memory::InMemoryEngineConfig;
use crate::store::{PersistenceEngineProvider, Row};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

/// Persistence engine keeping every row in process memory.
///
/// # Characteristics
/// - **Storage order**: rows stay in insertion order; replacing a row keeps
///   its position
/// - **Monotonic identities**: uids start at 1 and are never reused
/// - **Visibility columns**: rows carry `_location` and `_language`, which
///   [QuerySettings] may restrict on
/// - **Thread-Safe**: rows sit behind a `parking_lot` read-write lock; clones
///   share the same rows
///
/// # Usage
/// ```text
/// let engine = InMemoryEngine::new();
/// let repository = DocumentRepository::new(PersistenceEngine::new(engine.clone()));
/// ```
#[derive(Clone, Default)]
pub struct InMemoryEngine {
    inner: Arc<InMemoryEngineInner>,
}

impl InMemoryEngine {
    /// Creates an empty engine with the default configuration.
    pub fn new() -> InMemoryEngine {
        InMemoryEngine::with_config(InMemoryEngineConfig::new())
    }

    pub fn with_config(config: InMemoryEngineConfig) -> InMemoryEngine {
        InMemoryEngine {
            inner: Arc::new(InMemoryEngineInner::new(config)),
        }
    }

    pub fn config(&self) -> &InMemoryEngineConfig {
        &self.inner.config
    }

    /// Number of stored rows, regardless of visibility.
    pub fn len(&self) -> usize {
        self.inner.rows.read_with(|rows| rows.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PersistenceEngineProvider for InMemoryEngine {
    fn execute(&self, query: &Query) -> DocspaceResult<Vec<Row>> {
        self.inner.execute(query)
    }

    fn count(&self, query: &Query) -> DocspaceResult<u64> {
        self.inner.count(query)
    }

    fn insert(&self, document: &Document) -> DocspaceResult<u64> {
        self.inner.insert(document)
    }

    fn delete(&self, document: &Document) -> DocspaceResult<()> {
        self.inner.delete(document)
    }

    fn replace(&self, document: &Document) -> DocspaceResult<()> {
        self.inner.replace(document)
    }

    fn get_by_identity(&self, uid: u64) -> DocspaceResult<Option<Row>> {
        Ok(self.inner.rows.read_with(|rows| rows.get(&uid).cloned()))
    }
}

struct InMemoryEngineInner {
    rows: Atomic<IndexMap<u64, Row>>,
    next_uid: AtomicU64,
    config: InMemoryEngineConfig,
}

impl Default for InMemoryEngineInner {
    fn default() -> Self {
        InMemoryEngineInner::new(InMemoryEngineConfig::new())
    }
}

impl InMemoryEngineInner {
    fn new(config: InMemoryEngineConfig) -> InMemoryEngineInner {
        InMemoryEngineInner {
            rows: atomic(IndexMap::new()),
            next_uid: AtomicU64::new(FIRST_UID),
            config,
        }
    }

    fn execute(&self, query: &Query) -> DocspaceResult<Vec<Row>> {
        let mut rows = self.matching_rows(query)?;

        let orderings = query.get_orderings();
        if !orderings.is_empty() {
            rows.sort_by(|a, b| compare_rows(a, b, orderings.sorting_order()));
        }

        if let Some(limit) = query.get_limit() {
            rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        if !query.get_settings().is_raw() {
            for row in rows.iter_mut() {
                row.retain(|column, _| !ENGINE_COLUMNS.contains(&column.as_str()));
            }
        }

        log::debug!("Query {} returned {} rows", query.get_filter(), rows.len());
        Ok(rows)
    }

    fn count(&self, query: &Query) -> DocspaceResult<u64> {
        Ok(self.matching_rows(query)?.len() as u64)
    }

    fn insert(&self, document: &Document) -> DocspaceResult<u64> {
        if let Some(uid) = document.uid() {
            if self.rows.read_with(|rows| rows.contains_key(&uid)) {
                log::error!("Document with uid {} is already stored", uid);
                return Err(DocspaceError::new(
                    &format!("Document with uid {} is already stored", uid),
                    ErrorKind::InvalidOperation,
                ));
            }
        }

        let uid = self.next_uid.fetch_add(1, AtomicOrdering::SeqCst);
        let mut row = to_row(document);
        row.insert(DOC_UID.to_string(), Value::U64(uid));
        row.entry(ENGINE_STORAGE_LOCATION.to_string())
            .or_insert(Value::U64(self.config.get_storage_location()));
        row.entry(ENGINE_LANGUAGE.to_string())
            .or_insert(Value::I64(self.config.get_language()));

        self.rows.write_with(|rows| rows.insert(uid, row));
        log::debug!("Inserted row with uid {}", uid);
        Ok(uid)
    }

    fn delete(&self, document: &Document) -> DocspaceResult<()> {
        let uid = require_uid(document, "delete")?;
        match self.rows.write_with(|rows| rows.shift_remove(&uid)) {
            Some(_) => log::debug!("Deleted row with uid {}", uid),
            None => log::warn!("No row with uid {} to delete", uid),
        }
        Ok(())
    }

    fn replace(&self, document: &Document) -> DocspaceResult<()> {
        let uid = require_uid(document, "replace")?;
        self.rows.write_with(|rows| match rows.get_mut(&uid) {
            Some(existing) => {
                let mut row = to_row(document);
                for column in ENGINE_COLUMNS {
                    if !row.contains_key(column) {
                        if let Some(value) = existing.get(column) {
                            row.insert(column.to_string(), value.clone());
                        }
                    }
                }
                *existing = row;
                log::debug!("Replaced row with uid {}", uid);
                Ok(())
            }
            None => {
                log::error!("No row with uid {} to replace", uid);
                Err(DocspaceError::new(
                    &format!("No row with uid {} to replace", uid),
                    ErrorKind::NotFound,
                ))
            }
        })
    }

    fn matching_rows(&self, query: &Query) -> DocspaceResult<Vec<Row>> {
        let settings = query.get_settings();
        let filter = query.get_filter();
        let match_all = is_all_filter(filter);

        self.rows.read_with(|rows| -> DocspaceResult<Vec<Row>> {
            let mut matched = Vec::new();
            for row in rows.values() {
                if !is_visible(row, settings) {
                    continue;
                }

                if match_all {
                    matched.push(row.clone());
                    continue;
                }

                let view: Document = row.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                if filter.apply(&view)? {
                    matched.push(row.clone());
                }
            }
            Ok(matched)
        })
    }
}

fn to_row(document: &Document) -> Row {
    document.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

fn require_uid(document: &Document, operation: &str) -> DocspaceResult<u64> {
    document.uid().ok_or_else(|| {
        log::error!("Cannot {} a document without uid", operation);
        DocspaceError::new(
            &format!("Cannot {} a document without uid", operation),
            ErrorKind::NotIdentifiable,
        )
    })
}

fn is_visible(row: &Row, settings: &QuerySettings) -> bool {
    let language = row
        .get(ENGINE_LANGUAGE)
        .and_then(Value::as_integer)
        .and_then(|v| i64::try_from(v).ok())
        .unwrap_or(DEFAULT_LANGUAGE);
    let location = row
        .get(ENGINE_STORAGE_LOCATION)
        .and_then(Value::as_integer)
        .and_then(|v| u64::try_from(v).ok())
        .unwrap_or(DEFAULT_STORAGE_LOCATION);

    settings.language_visible(language) && settings.location_visible(location)
}

fn compare_rows(a: &Row, b: &Row, sorting_order: &[(String, SortOrder)]) -> Ordering {
    for (field, order) in sorting_order {
        let left = a.get(field).unwrap_or(&Value::Null);
        let right = b.get(field).unwrap_or(&Value::Null);
        let ordering = match order {
            SortOrder::Ascending => left.cmp(right),
            SortOrder::Descending => right.cmp(left),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
