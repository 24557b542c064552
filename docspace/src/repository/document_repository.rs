use crate::collection::Document;
use crate::common::{Value, DOC_ID, DOC_NAMESPACE};
use crate::errors::{DocspaceError, DocspaceResult, ErrorKind};
use crate::filter::field;
use crate::query::Query;
use crate::store::PersistenceEngine;

use super::hydration::{convert_result, convert_results};
use super::namespace::validate_namespace;
use super::{RepositoryBuilder, RepositoryConfig};

/// A document repository scoped to one namespace at a time.
///
/// `DocumentRepository` sits on top of a [PersistenceEngine] and adds a
/// mandatory namespace filter to reads and writes, so documents of one
/// namespace never leak into another. Rows coming back from the engine are
/// hydrated into [Document]s field by field.
///
/// # Namespace Resolution
///
/// - `find_all`, `count_all` and `remove_all` need a selected namespace.
/// - `add`, `remove` and `update` use the document's own namespace when it
///   has one, else they assign the selected namespace to the document.
/// - `find_one_by_id`, `find_all_ignore_namespace` and `find_by_identity`
///   ignore namespaces entirely.
///
/// Each of the namespace-bound operations fails with `NoNamespaceSelected`
/// before the engine is touched when there is no namespace to use.
///
/// # Query Settings
///
/// Every query the repository builds switches the engine's language and
/// storage-location filters off and requests raw rows. The namespace filter
/// is the only scoping left.
///
/// # Examples
///
/// ```rust,ignore
/// use docspace::doc;
/// use docspace::repository::DocumentRepository;
/// use docspace::store::PersistenceEngine;
/// use docspace::store::memory::InMemoryEngine;
///
/// let engine = PersistenceEngine::new(InMemoryEngine::new());
/// let mut repository = DocumentRepository::new(engine);
/// repository.set_namespace("blog")?;
///
/// let mut post = doc!{ id: "first-post", title: "Hello" };
/// repository.add(&mut post)?;
/// assert_eq!(post.namespace(), Some("blog"));
///
/// let posts = repository.find_all()?;
/// assert_eq!(posts.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DocumentRepository {
    engine: PersistenceEngine,
    config: RepositoryConfig,
    namespace: Option<String>,
}

impl DocumentRepository {
    /// Creates a repository with default configuration and no namespace.
    pub fn new(engine: PersistenceEngine) -> DocumentRepository {
        DocumentRepository::with_config(engine, RepositoryConfig::new())
    }

    pub fn with_config(engine: PersistenceEngine, config: RepositoryConfig) -> DocumentRepository {
        let namespace = config.namespace().map(str::to_string);
        DocumentRepository {
            engine,
            config,
            namespace,
        }
    }

    pub fn builder(engine: PersistenceEngine) -> RepositoryBuilder {
        RepositoryBuilder::new(engine)
    }

    /// Returns a copy of this repository scoped to `namespace`. The engine
    /// handle is shared with the original.
    pub fn with_namespace(&self, namespace: &str) -> DocspaceResult<DocumentRepository> {
        let mut repository = self.clone();
        repository.set_namespace(namespace)?;
        Ok(repository)
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn engine(&self) -> &PersistenceEngine {
        &self.engine
    }

    /// Selects the namespace.
    ///
    /// # Errors
    ///
    /// `InvalidNamespace` when `namespace` is not a non-empty run of ASCII
    /// letters and digits. The previously selected namespace stays in place.
    pub fn set_namespace(&mut self, namespace: &str) -> DocspaceResult<()> {
        validate_namespace(namespace)?;
        self.namespace = Some(namespace.to_string());
        Ok(())
    }

    pub fn get_namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns the selected namespace, selecting `namespace` first when given.
    pub fn namespace(&mut self, namespace: Option<&str>) -> DocspaceResult<Option<&str>> {
        if let Some(namespace) = namespace {
            self.set_namespace(namespace)?;
        }
        Ok(self.get_namespace())
    }

    pub fn clear_namespace(&mut self) {
        self.namespace = None;
    }

    /// Stores a new document.
    ///
    /// A document without namespace is assigned the selected one. The storage
    /// identity handed out by the engine is written back into `document`.
    pub fn add(&self, document: &mut Document) -> DocspaceResult<()> {
        self.resolve_namespace(document)?;
        let uid = self.engine.insert(document)?;
        document.set_uid(uid);
        log::debug!("Added document {} to namespace {:?}", uid, document.namespace());
        Ok(())
    }

    pub fn remove(&self, document: &mut Document) -> DocspaceResult<()> {
        self.resolve_namespace(document)?;
        self.engine.delete(document)?;
        log::debug!("Removed document {:?} from namespace {:?}", document.uid(), document.namespace());
        Ok(())
    }

    /// Replaces the stored record carrying the document's storage identity.
    pub fn update(&self, document: &mut Document) -> DocspaceResult<()> {
        self.resolve_namespace(document)?;
        self.engine.replace(document)?;
        log::debug!("Updated document {:?} in namespace {:?}", document.uid(), document.namespace());
        Ok(())
    }

    /// Returns every document of the selected namespace.
    pub fn find_all(&self) -> DocspaceResult<Vec<Document>> {
        let namespace = self.require_namespace()?;
        let query = self
            .create_query()
            .matching(field(DOC_NAMESPACE).eq(namespace));
        let rows = self.engine.execute(&query)?;
        Ok(convert_results(rows))
    }

    /// Selects `namespace` and returns all of its documents.
    pub fn find_by_namespace(&mut self, namespace: &str) -> DocspaceResult<Vec<Document>> {
        self.set_namespace(namespace)?;
        self.find_all()
    }

    /// Finds the first document whose `id` equals `id`, in any namespace.
    pub fn find_one_by_id(&self, id: impl Into<Value>) -> DocspaceResult<Option<Document>> {
        let query = self.create_query().matching(field(DOC_ID).eq(id)).limit(1);
        let mut rows = self.engine.execute(&query)?;
        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(convert_result(rows.swap_remove(0))))
    }

    pub fn find_by_id(&self, id: impl Into<Value>) -> DocspaceResult<Option<Document>> {
        self.find_one_by_id(id)
    }

    /// Returns every document in the store, whatever its namespace.
    pub fn find_all_ignore_namespace(&self) -> DocspaceResult<Vec<Document>> {
        let rows = self.engine.execute(&self.create_query())?;
        Ok(convert_results(rows))
    }

    pub fn count_all(&self) -> DocspaceResult<u64> {
        let namespace = self.require_namespace()?;
        let query = self
            .create_query()
            .matching(field(DOC_NAMESPACE).eq(namespace));
        self.engine.count(&query)
    }

    /// Removes every document of the selected namespace, one by one.
    ///
    /// Not atomic: when a delete fails, the documents removed before it stay
    /// removed and the error is returned.
    pub fn remove_all(&self) -> DocspaceResult<u64> {
        let mut removed = 0;
        for mut document in self.find_all()? {
            self.remove(&mut document)?;
            removed += 1;
        }
        log::debug!("Removed {} documents from namespace {:?}", removed, self.get_namespace());
        Ok(removed)
    }

    /// Looks a document up by storage identity, bypassing namespaces.
    pub fn find_by_identity(&self, uid: u64) -> DocspaceResult<Option<Document>> {
        Ok(self.engine.get_by_identity(uid)?.map(convert_result))
    }

    pub fn find_by_uid(&self, uid: u64) -> DocspaceResult<Option<Document>> {
        self.find_by_identity(uid)
    }

    /// Creates a query carrying the default orderings and settings, with the
    /// language filter, the storage-location filter and mapped rows turned off.
    pub fn create_query(&self) -> Query {
        let settings = self.config.default_query_settings().unrestricted();
        log::debug!("Creating query with settings {:?}", settings);
        Query::new()
            .orderings(self.config.default_orderings().clone())
            .settings(settings)
    }

    fn require_namespace(&self) -> DocspaceResult<&str> {
        match self.get_namespace() {
            Some(namespace) => Ok(namespace),
            None => {
                log::error!("No namespace selected");
                Err(DocspaceError::new(
                    "No Document database has been selected",
                    ErrorKind::NoNamespaceSelected,
                ))
            }
        }
    }

    fn resolve_namespace(&self, document: &mut Document) -> DocspaceResult<()> {
        if let Some(namespace) = document.namespace() {
            return validate_namespace(namespace);
        }

        match self.get_namespace() {
            Some(namespace) => {
                document.set_namespace(namespace);
                Ok(())
            }
            None => {
                log::error!("Neither the document nor the repository has a namespace");
                Err(DocspaceError::new(
                    "The given object and the repository have no database set",
                    ErrorKind::NoNamespaceSelected,
                ))
            }
        }
    }
}
