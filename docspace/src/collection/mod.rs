//! Documents: the dynamically keyed records the repository stores.
//!
//! ```rust,ignore
//! use docspace::collection::Document;
//!
//! let mut doc = Document::new();
//! doc.put("title", "Hello")?;
//! doc.set_namespace("blog");
//! ```
//!
//! # Reserved Fields
//!
//! - `namespace` - the logical partition of the document
//! - `id` - the caller-visible identifier
//! - `uid` - the storage identity assigned by the engine

mod document;

pub use document::*;
