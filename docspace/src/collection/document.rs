use im::OrdMap;
use smallvec::SmallVec;

use crate::common::{Value, DOC_ID, DOC_NAMESPACE, DOC_UID, RESERVED_FIELDS};
use crate::errors::{DocspaceError, DocspaceResult, ErrorKind};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};

type FieldVec = SmallVec<[String; 8]>;

/// A dynamically keyed record stored in a namespace.
///
/// Document keys are [String]s and values are [Value]s. Three keys are
/// reserved:
///
/// * `namespace` - The logical partition the document belongs to. A document
///   without one picks up the repository's current namespace when it is added.
/// * `id` - The caller-visible identifier, matched by
///   [`crate::repository::DocumentRepository::find_one_by_id`].
/// * `uid` - The storage identity handed out by the persistence engine on
///   insert. Update and remove need it.
///
/// The backing `im::OrdMap` makes clones O(1); mutations share structure with
/// the previous version instead of copying it.
#[derive(Clone, Eq, PartialEq, Hash, Default, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    data: OrdMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document {
            data: OrdMap::new(),
        }
    }

    /// Creates an empty document carrying a random UUID v4 as its `id`.
    pub fn with_random_id() -> Self {
        let mut document = Document::new();
        document.set_id(uuid::Uuid::new_v4().to_string());
        document
    }

    /// Checks if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Associates the specified [Value] with the specified key in this document.
    ///
    /// If the key already exists its value is replaced.
    ///
    /// # Errors
    ///
    /// * The key is empty
    /// * The key is `uid` and the value is not an integer
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut doc = Document::new();
    /// doc.put("title", "Hello")?;
    /// doc.put("views", 30)?;
    /// assert_eq!(doc.size(), 2);
    /// ```
    pub fn put<'a, T: Into<Value>>(&mut self, key: impl Into<Cow<'a, str>>, value: T) -> DocspaceResult<()> {
        let key = key.into();
        if key.is_empty() {
            log::error!("Document does not support empty key");
            return Err(DocspaceError::new(
                "Document does not support empty key",
                ErrorKind::InvalidFieldName,
            ));
        }

        let value = value.into();
        if key == DOC_UID && !value.is_integer() {
            log::error!("Document uid must be an integer, found {}", value);
            return Err(DocspaceError::new(
                "Document uid must be an integer",
                ErrorKind::InvalidOperation,
            ));
        }

        self.data = self.data.update(key.into_owned(), value);
        Ok(())
    }

    /// Copies a raw value into the field named `key`.
    ///
    /// This is the hydration primitive: no key validation and no type
    /// coercion, the value is stored exactly as the engine returned it.
    pub fn set_value_for_key(&mut self, key: &str, value: Value) {
        self.data.insert(key.to_string(), value);
    }

    /// Returns the [Value] for `key`, or [Value::Null] if the key is absent.
    pub fn get(&self, key: &str) -> Value {
        self.data.get(key).cloned().unwrap_or(Value::Null)
    }

    /// Removes the key and returns its previous value, if any.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let previous = self.data.get(key).cloned();
        self.data = self.data.without(key);
        previous
    }

    /// Returns the namespace of this document.
    ///
    /// An absent, null, empty or non-string `namespace` field counts as "no
    /// namespace".
    pub fn namespace(&self) -> Option<&str> {
        match self.data.get(DOC_NAMESPACE) {
            Some(Value::String(namespace)) if !namespace.is_empty() => Some(namespace.as_str()),
            _ => None,
        }
    }

    /// Sets the namespace of this document.
    pub fn set_namespace(&mut self, namespace: &str) {
        self.data.insert(DOC_NAMESPACE.to_string(), Value::from(namespace));
    }

    /// Returns the caller-visible identifier, or [Value::Null].
    pub fn id(&self) -> Value {
        self.get(DOC_ID)
    }

    pub fn set_id<T: Into<Value>>(&mut self, id: T) {
        self.data.insert(DOC_ID.to_string(), id.into());
    }

    /// Returns the storage identity assigned by the engine, if the document
    /// has been persisted.
    pub fn uid(&self) -> Option<u64> {
        match self.data.get(DOC_UID) {
            Some(Value::U64(uid)) => Some(*uid),
            Some(Value::I64(uid)) if *uid >= 0 => Some(*uid as u64),
            _ => None,
        }
    }

    pub fn set_uid(&mut self, uid: u64) {
        self.data.insert(DOC_UID.to_string(), Value::U64(uid));
    }

    /// Checks whether this document has a storage identity.
    pub fn has_uid(&self) -> bool {
        self.uid().is_some()
    }

    /// Returns the non-reserved top level field names.
    pub fn fields(&self) -> FieldVec {
        self.data
            .keys()
            .filter(|key| !RESERVED_FIELDS.contains(&key.as_str()))
            .cloned()
            .collect()
    }

    /// Returns the number of entries in the document, reserved fields included.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.data.iter()
    }

    /// Converts this document to a [BTreeMap].
    pub fn to_map(&self) -> BTreeMap<String, Value> {
        self.data.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    pub(crate) fn to_pretty_json(&self, indent: usize) -> String {
        if self.data.is_empty() {
            return "{}".to_string();
        }

        let indent_str = " ".repeat(indent + 2);
        let entries: Vec<String> = self
            .data
            .iter()
            .map(|(key, value)| format!("{}\"{}\": {}", indent_str, key, value.to_pretty_json(indent + 2)))
            .collect();
        format!("{{\n{}\n{}}}", entries.join(",\n"), " ".repeat(indent))
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_pretty_json(0))
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Document {
            data: iter.into_iter().collect(),
        }
    }
}

#[doc(hidden)]
pub fn normalize(value: &str) -> String {
    value.trim_matches('"').to_string()
}

/// Creates a Document with JSON-like syntax.
///
/// # Examples
///
/// ```rust
/// use docspace::doc;
///
/// let empty = doc!{};
///
/// let article = doc!{
///     namespace: "blog",
///     id: "first-post",
///     title: "Hello",
///     tags: ["intro", "meta"],
///     author: {
///         name: "Ada"
///     }
/// };
/// assert_eq!(article.namespace(), Some("blog"));
/// ```
#[macro_export]
macro_rules! doc {
    ({}) => {
        $crate::collection::Document::new()
    };

    () => {
        $crate::collection::Document::new()
    };

    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::doc!($($key : $value),*)
    };

    ($($key:tt : $value:tt),* $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::doc_value;

            let mut doc = $crate::collection::Document::new();
            $(
                doc.put($crate::collection::normalize(stringify!($key)), $crate::doc_value!($value))
                .expect(&format!("Failed to put value {} in document", stringify!($value)));
            )*
            doc
        }
    };
}

/// Helper macro to convert values for the doc! macro.
#[macro_export]
macro_rules! doc_value {
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        {
            $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
        }
    };

    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
