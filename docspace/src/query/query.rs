use crate::common::{SortOrder, SortableFields};
use crate::filter::{all, Filter};

use super::QuerySettings;

/// A single request to a persistence engine.
///
/// Queries are built per call and thrown away afterwards. They carry the
/// predicate, the orderings, an optional limit and the [QuerySettings] the
/// engine must honor.
///
/// ```rust,ignore
/// let query = Query::new()
///     .matching(field("namespace").eq("blog"))
///     .sort_by("title", SortOrder::Ascending)
///     .limit(10);
/// ```
#[derive(Clone)]
pub struct Query {
    filter: Filter,
    orderings: SortableFields,
    limit: Option<u64>,
    settings: QuerySettings,
}

impl Default for Query {
    fn default() -> Self {
        Query::new()
    }
}

impl Query {
    /// Creates a query matching everything, unordered, with default settings.
    pub fn new() -> Query {
        Query {
            filter: all(),
            orderings: SortableFields::new(),
            limit: None,
            settings: QuerySettings::new(),
        }
    }

    /// Replaces the predicate.
    pub fn matching(mut self, filter: Filter) -> Query {
        self.filter = filter;
        self
    }

    pub fn sort_by(mut self, field_name: &str, sort_order: SortOrder) -> Query {
        self.orderings = self.orderings.add_sorted_field(field_name.to_string(), sort_order);
        self
    }

    pub fn orderings(mut self, orderings: SortableFields) -> Query {
        self.orderings = orderings;
        self
    }

    pub fn limit(mut self, limit: u64) -> Query {
        self.limit = Some(limit);
        self
    }

    pub fn settings(mut self, settings: QuerySettings) -> Query {
        self.settings = settings;
        self
    }

    pub fn get_filter(&self) -> &Filter {
        &self.filter
    }

    pub fn get_orderings(&self) -> &SortableFields {
        &self.orderings
    }

    pub fn get_limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn get_settings(&self) -> &QuerySettings {
        &self.settings
    }
}
