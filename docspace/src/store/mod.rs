//! The persistence-engine seam and its in-memory implementation.
//!
//! ```rust,ignore
//! use docspace::store::PersistenceEngine;
//! use docspace::store::memory::InMemoryEngine;
//!
//! let engine = PersistenceEngine::new(InMemoryEngine::new());
//! ```

pub mod memory;
mod persistence_engine;

pub use persistence_engine::*;
