//! Namespace-scoped document repositories.
//!
//! A [DocumentRepository] wraps a [crate::store::PersistenceEngine] and keeps
//! reads and writes inside the selected namespace.
//!
//! ```rust,ignore
//! use docspace::repository::DocumentRepository;
//! use docspace::store::PersistenceEngine;
//! use docspace::store::memory::InMemoryEngine;
//!
//! let engine = PersistenceEngine::new(InMemoryEngine::new());
//! let blog = DocumentRepository::builder(engine.clone())
//!     .namespace("blog")
//!     .build()?;
//!
//! // same store, another namespace
//! let news = blog.with_namespace("news")?;
//! ```
//!
//! # Operations
//!
//! - Namespace selection: `set_namespace`, `get_namespace`, `namespace`, `clear_namespace`
//! - Writes: `add`, `update`, `remove`, `remove_all`
//! - Reads: `find_all`, `find_by_namespace`, `count_all`, `find_one_by_id`,
//!   `find_all_ignore_namespace`, `find_by_identity`
//! - Field-named finders (`find_by`, `find_one_by`, `count_by`, `call`) are
//!   not supported and always fail

mod document_repository;
mod dynamic_finder;
mod hydration;
mod namespace;
mod repository_config;

pub use document_repository::*;
pub use namespace::is_valid_namespace;
pub use repository_config::*;
