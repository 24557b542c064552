use crate::collection::Document;
use crate::common::Value;
use crate::errors::{DocspaceError, DocspaceResult, ErrorKind};
use std::any::Any;
use std::fmt::Display;
use std::ops::Deref;
use std::sync::Arc;

use super::{AllFilter, AndFilter};

/// Trait for implementing query predicates.
///
/// A `FilterProvider` decides whether a document matches. Persistence engines
/// call [FilterProvider::apply] on every candidate record; engines that can
/// push predicates down inspect the field accessors instead.
pub trait FilterProvider: Any + Send + Sync + Display {
    /// Applies the filter to a document and returns whether it matches.
    fn apply(&self, entry: &Document) -> DocspaceResult<bool>;

    /// Checks if this filter operates on a specific field.
    #[inline]
    fn has_field(&self) -> bool {
        false
    }

    /// Gets the field name this filter operates on.
    fn get_field_name(&self) -> DocspaceResult<String> {
        log::error!("Filter {} does not have field name", self);
        Err(DocspaceError::new(
            "Filter does not have field name",
            ErrorKind::FilterError,
        ))
    }

    /// Gets the field value this filter compares against.
    fn get_field_value(&self) -> DocspaceResult<Option<Value>> {
        log::debug!("Filter {} does not have field value", self);
        Err(DocspaceError::new(
            "Filter does not have field value",
            ErrorKind::FilterError,
        ))
    }

    /// Returns the operands of a logical filter.
    fn logical_filters(&self) -> DocspaceResult<Vec<Filter>> {
        Err(DocspaceError::new(
            "Filter is not a logical filter",
            ErrorKind::FilterError,
        ))
    }

    fn as_any(&self) -> &dyn Any;
}

/// A query predicate.
///
/// `Filter` wraps a [FilterProvider] behind an `Arc`, so clones are cheap and
/// a query can be handed to an engine without copying its predicate tree.
///
/// # Filter Composition
///
/// - `and(other)` - Combines with another filter using logical AND
#[derive(Clone)]
pub struct Filter {
    inner: Arc<dyn FilterProvider>,
}

impl Filter {
    /// Creates a new filter from a filter provider implementation.
    pub fn new<T: FilterProvider + 'static>(inner: T) -> Self {
        Filter { inner: Arc::new(inner) }
    }

    /// Combines this filter with another using logical AND.
    pub fn and(&self, filter: Filter) -> Self {
        Filter::new(AndFilter::new(vec![self.clone(), filter]))
    }
}

impl Display for Filter {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Deref for Filter {
    type Target = Arc<dyn FilterProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Creates a filter that matches all documents.
pub fn all() -> Filter {
    Filter::new(AllFilter {})
}

/// Combines multiple filters using logical AND.
pub fn and(filters: Vec<Filter>) -> Filter {
    Filter::new(AndFilter::new(filters))
}

pub(crate) fn is_all_filter(filter: &Filter) -> bool {
    filter.as_any().is::<AllFilter>()
}
