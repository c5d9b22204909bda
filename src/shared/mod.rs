// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns (enrichment)
pub mod domain; // Shared domain concepts (ids, session)
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (HTTP client, config)
pub mod utils; // Shared utilities

// Re-exports for convenience
pub use infrastructure::{ApiClient, ClientConfig};
