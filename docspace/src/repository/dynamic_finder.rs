use crate::collection::Document;
use crate::common::Value;
use crate::errors::{DocspaceError, DocspaceResult, ErrorKind};

use super::DocumentRepository;

/// Field-named finders.
///
/// None of these are supported. They exist so callers migrating from
/// `findBy<Field>` style lookups get a typed `UnsupportedOperation` error
/// naming the method they asked for.
impl DocumentRepository {
    /// Dispatches a finder by method name. Always fails.
    pub fn call(&self, method_name: &str, _arguments: &[Value]) -> DocspaceResult<Vec<Document>> {
        Err(unsupported(method_name))
    }

    /// `findBy<Field>`. Always fails.
    pub fn find_by(&self, field_name: &str, _value: impl Into<Value>) -> DocspaceResult<Vec<Document>> {
        Err(unsupported(&finder_name("findBy", field_name)))
    }

    /// `findOneBy<Field>`. Always fails.
    pub fn find_one_by(&self, field_name: &str, _value: impl Into<Value>) -> DocspaceResult<Option<Document>> {
        Err(unsupported(&finder_name("findOneBy", field_name)))
    }

    /// `countBy<Field>`. Always fails.
    pub fn count_by(&self, field_name: &str, _value: impl Into<Value>) -> DocspaceResult<u64> {
        Err(unsupported(&finder_name("countBy", field_name)))
    }
}

fn finder_name(prefix: &str, field_name: &str) -> String {
    let mut chars = field_name.chars();
    match chars.next() {
        Some(first) => format!("{}{}{}", prefix, first.to_uppercase(), chars.as_str()),
        None => prefix.to_string(),
    }
}

fn unsupported(method_name: &str) -> DocspaceError {
    log::error!("Repository method {} is not supported", method_name);
    DocspaceError::new(
        &format!("The method \"{}\" is not supported by the repository.", method_name),
        ErrorKind::UnsupportedOperation,
    )
}
