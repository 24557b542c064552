//! Query predicates.
//!
//! The repository only ever needs equality matches joined with AND, so that is
//! what this module provides:
//!
//! ```rust,ignore
//! use docspace::filter::{all, field};
//!
//! let scoped = field("namespace").eq("blog");
//! let one = scoped.and(field("id").eq("first-post"));
//! let everything = all();
//! ```

mod filter;
mod fluent;

mod basic_filters;
mod logical_filters;

pub(crate) use basic_filters::*;
pub use filter::*;
pub use fluent::*;
pub(crate) use logical_filters::*;
