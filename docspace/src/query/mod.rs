//! Per-call queries handed to a persistence engine.

mod query;
mod query_settings;

pub use query::*;
pub use query_settings::*;
