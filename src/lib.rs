//! Song Catalog Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog;
pub mod config;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog::{load_catalog, Catalog, Song};
pub use server::{make_app, run_server, RequestsLoggingLevel};
