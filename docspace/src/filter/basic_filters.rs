use std::any::Any;
use std::fmt::Display;

use crate::collection::Document;
use crate::common::Value;
use crate::errors::DocspaceResult;

use super::FilterProvider;

/// A filter that matches all documents.
pub(crate) struct AllFilter;

impl FilterProvider for AllFilter {
    fn apply(&self, _entry: &Document) -> DocspaceResult<bool> {
        Ok(true)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Display for AllFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AllFilter")
    }
}

/// A filter that matches documents where a field equals a specific value.
///
/// A missing field reads as [Value::Null], so `eq(Value::Null)` matches
/// documents that lack the field.
pub(crate) struct EqualsFilter {
    field_name: String,
    field_value: Value,
}

impl EqualsFilter {
    #[inline]
    pub(crate) fn new(field_name: String, field_value: Value) -> Self {
        EqualsFilter {
            field_name,
            field_value,
        }
    }
}

impl Display for EqualsFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} == {})", self.field_name, self.field_value)
    }
}

impl FilterProvider for EqualsFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> DocspaceResult<bool> {
        Ok(entry.get(&self.field_name) == self.field_value)
    }

    fn has_field(&self) -> bool {
        true
    }

    fn get_field_name(&self) -> DocspaceResult<String> {
        Ok(self.field_name.clone())
    }

    fn get_field_value(&self) -> DocspaceResult<Option<Value>> {
        Ok(Some(self.field_value.clone()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
