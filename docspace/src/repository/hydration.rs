use crate::collection::Document;
use crate::store::Row;

/// Turns a raw engine row into a [Document] by copying every column into a
/// field of the same name.
pub(crate) fn convert_result(row: Row) -> Document {
    let mut document = Document::new();
    for (key, value) in row {
        document.set_value_for_key(&key, value);
    }
    document
}

pub(crate) fn convert_results(rows: Vec<Row>) -> Vec<Document> {
    rows.into_iter().map(convert_result).collect()
}
