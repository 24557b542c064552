use crate::collection::Document;
use crate::common::Value;
use crate::errors::DocspaceResult;
use crate::query::Query;
use indexmap::IndexMap;
use std::ops::Deref;
use std::sync::Arc;

/// A raw record as a persistence engine returns it: column name to value,
/// in the engine's column order.
pub type Row = IndexMap<String, Value>;

/// The capability a persistence engine offers to the repository.
///
/// # Purpose
/// The repository never talks to a storage technology directly. It builds a
/// [Query] and hands it, or a single [Document], to an implementation of this
/// trait. Anything able to filter, count, insert, delete, replace and look up
/// records by storage identity can back a repository.
///
/// # Contract
/// - `execute` honors the query's filter, orderings, limit and
///   [crate::query::QuerySettings]. Without orderings, rows come back in
///   storage order.
/// - `count` honors filter and settings and ignores the limit.
/// - `insert` assigns and returns the storage identity (`uid`).
/// - `delete` and `replace` address records by the document's `uid`.
/// - `get_by_identity` ignores every visibility rule.
///
/// # Implementations
/// - [crate::store::memory::InMemoryEngine]: rows kept in process memory
///
/// # Thread Safety
/// Implementers must be `Send + Sync`; a [PersistenceEngine] handle may be
/// cloned into several repositories.
pub trait PersistenceEngineProvider: Send + Sync {
    /// Runs the query and returns the matching rows.
    fn execute(&self, query: &Query) -> DocspaceResult<Vec<Row>>;

    /// Counts the rows the query matches.
    fn count(&self, query: &Query) -> DocspaceResult<u64>;

    /// Stores a new record and returns its storage identity.
    fn insert(&self, document: &Document) -> DocspaceResult<u64>;

    /// Deletes the record with the document's storage identity.
    fn delete(&self, document: &Document) -> DocspaceResult<()>;

    /// Replaces the record with the document's storage identity.
    fn replace(&self, document: &Document) -> DocspaceResult<()>;

    /// Looks a record up by storage identity.
    fn get_by_identity(&self, uid: u64) -> DocspaceResult<Option<Row>>;
}

/// Shared handle to a persistence engine.
///
/// Cloning is cheap: it only bumps the reference count of the provider.
#[derive(Clone)]
pub struct PersistenceEngine {
    inner: Arc<dyn PersistenceEngineProvider>,
}

impl PersistenceEngine {
    /// Wraps a provider implementation.
    pub fn new<T: PersistenceEngineProvider + 'static>(inner: T) -> Self {
        PersistenceEngine { inner: Arc::new(inner) }
    }
}

impl std::fmt::Debug for PersistenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceEngine").finish_non_exhaustive()
    }
}

impl Deref for PersistenceEngine {
    type Target = Arc<dyn PersistenceEngineProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
