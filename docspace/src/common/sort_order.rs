/// Specifies the direction for sorting documents.
///
/// Used by repository default orderings and by [crate::query::Query] to
/// control result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortOrder {
    /// Sort in ascending order (smallest to largest, A-Z)
    Ascending,
    /// Sort in descending order (largest to smallest, Z-A)
    Descending,
}

/// An ordered list of `(field, direction)` pairs.
///
/// Earlier entries take precedence; later entries only break ties.
///
/// ```text
/// let orderings = SortableFields::new()
///     .add_sorted_field("title".to_string(), SortOrder::Ascending)
///     .add_sorted_field("uid".to_string(), SortOrder::Descending);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortableFields {
    sorting_order: Vec<(String, SortOrder)>,
}

impl SortableFields {
    pub fn new() -> SortableFields {
        SortableFields {
            sorting_order: Vec::new(),
        }
    }

    /// Appends a field. A field added twice keeps its first position and takes
    /// the newer direction.
    pub fn add_sorted_field(mut self, field_name: String, sort_order: SortOrder) -> SortableFields {
        match self
            .sorting_order
            .iter_mut()
            .find(|(name, _)| *name == field_name)
        {
            Some(entry) => entry.1 = sort_order,
            None => self.sorting_order.push((field_name, sort_order)),
        }
        self
    }

    pub fn field_names(&self) -> Vec<String> {
        self.sorting_order.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn sorting_order(&self) -> &[(String, SortOrder)] {
        &self.sorting_order
    }

    pub fn is_empty(&self) -> bool {
        self.sorting_order.is_empty()
    }
}
