/// Shared application layer patterns
///
/// This module contains application-level abstractions used across
/// multiple bounded contexts.
pub mod enrichment;

pub use enrichment::{enrich_each, Lookup};
