//! # Docspace - Namespace-Scoped Document Repository
//!
//! Docspace keeps documents of many logical partitions ("namespaces") in one
//! shared store and guards every read and write with the namespace the caller
//! selected.
//!
//! ## Key Features
//!
//! - **Namespace scoping**: reads and writes are filtered by the selected namespace
//! - **Pluggable engines**: anything implementing [`store::PersistenceEngineProvider`]
//!   can back a repository
//! - **In-memory engine**: ships with [`store::memory::InMemoryEngine`]
//! - **Loose documents**: dynamically keyed [`collection::Document`]s built with `doc!`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docspace::doc;
//! use docspace::repository::DocumentRepository;
//! use docspace::store::PersistenceEngine;
//! use docspace::store::memory::InMemoryEngine;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = PersistenceEngine::new(InMemoryEngine::new());
//! let mut repository = DocumentRepository::new(engine);
//! repository.set_namespace("blog")?;
//!
//! let mut post = doc!{ id: "hello", title: "Hello World" };
//! repository.add(&mut post)?;
//!
//! for document in repository.find_all()? {
//!     println!("{}", document);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - Documents
//! - [`common`] - Values, sort orders, constants and lock helpers
//! - [`errors`] - Error types and result definitions
//! - [`filter`] - Query filters and filter providers
//! - [`query`] - Queries and engine visibility settings
//! - [`repository`] - The namespace-scoped document repository
//! - [`store`] - Persistence engine abstraction and the in-memory engine

pub mod collection;
pub mod common;
pub mod errors;
pub mod filter;
pub mod query;
pub mod repository;
pub mod store;

pub use common::*;
