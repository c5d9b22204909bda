/// Shared infrastructure concerns
///
/// This module contains infrastructure implementations that are shared across
/// multiple bounded contexts (modules).
pub mod api_client;
pub mod config;

// Re-exports for convenience
pub use api_client::ApiClient;
pub use config::ClientConfig;
