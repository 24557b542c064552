mod document_crud_test;
mod dynamic_finder_test;
mod namespace_test;
mod query_settings_test;
mod remove_all_test;

use docspace::collection::Document;
use docspace::common::Value;

/// Reads a string field, panicking with the field name when it is missing.
pub fn text(document: &Document, field: &str) -> String {
    match document.get(field) {
        Value::String(s) => s,
        other => panic!("field {} is not a string: {:?}", field, other),
    }
}

pub fn titles(documents: &[Document]) -> Vec<String> {
    documents.iter().map(|d| text(d, "title")).collect()
}
