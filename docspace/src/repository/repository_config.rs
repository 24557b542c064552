use crate::common::{SortOrder, SortableFields};
use crate::errors::{DocspaceError, DocspaceResult};
use crate::query::QuerySettings;
use crate::store::PersistenceEngine;

use super::namespace::validate_namespace;
use super::DocumentRepository;

/// Construction-time settings of a [DocumentRepository].
///
/// - `namespace`: the namespace selected when the repository is built
/// - `default_orderings`: orderings every query starts from
/// - `default_query_settings`: settings every query starts from, before the
///   repository switches the engine-level visibility filters off
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryConfig {
    namespace: Option<String>,
    default_orderings: SortableFields,
    default_query_settings: QuerySettings,
}

impl RepositoryConfig {
    pub fn new() -> RepositoryConfig {
        RepositoryConfig::default()
    }

    /// Selects the initial namespace.
    ///
    /// # Errors
    ///
    /// `InvalidNamespace` when `namespace` is not a non-empty run of ASCII
    /// letters and digits.
    pub fn set_namespace(&mut self, namespace: &str) -> DocspaceResult<()> {
        validate_namespace(namespace)?;
        self.namespace = Some(namespace.to_string());
        Ok(())
    }

    pub fn add_ordering(&mut self, field_name: &str, sort_order: SortOrder) {
        let orderings = std::mem::take(&mut self.default_orderings);
        self.default_orderings = orderings.add_sorted_field(field_name.to_string(), sort_order);
    }

    pub fn set_default_orderings(&mut self, orderings: SortableFields) {
        self.default_orderings = orderings;
    }

    pub fn set_default_query_settings(&mut self, settings: QuerySettings) {
        self.default_query_settings = settings;
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn default_orderings(&self) -> &SortableFields {
        &self.default_orderings
    }

    pub fn default_query_settings(&self) -> &QuerySettings {
        &self.default_query_settings
    }
}

/// Builder for a [DocumentRepository].
///
/// Configuration errors are captured and returned from [RepositoryBuilder::build],
/// so calls can be chained without checking each step.
///
/// ```rust,ignore
/// let repository = DocumentRepository::builder(engine)
///     .namespace("blog")
///     .order_by("title", SortOrder::Ascending)
///     .build()?;
/// ```
pub struct RepositoryBuilder {
    engine: PersistenceEngine,
    config: RepositoryConfig,
    error: Option<DocspaceError>,
}

impl RepositoryBuilder {
    pub(crate) fn new(engine: PersistenceEngine) -> RepositoryBuilder {
        RepositoryBuilder {
            engine,
            config: RepositoryConfig::new(),
            error: None,
        }
    }

    pub fn namespace(mut self, namespace: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_namespace(namespace) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Appends a default ordering. Later calls break ties of earlier ones.
    pub fn order_by(mut self, field_name: &str, sort_order: SortOrder) -> Self {
        self.config.add_ordering(field_name, sort_order);
        self
    }

    pub fn query_settings(mut self, settings: QuerySettings) -> Self {
        self.config.set_default_query_settings(settings);
        self
    }

    pub fn config(mut self, config: RepositoryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> DocspaceResult<DocumentRepository> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(DocumentRepository::with_config(self.engine, self.config))
    }
}
