//! Beer Catalog Domain Module
//!
//! This module contains the read-only beer catalog, including:
//! - Domain models (Beer, Measure, search parameters)
//! - The loader that decodes the catalog data file
//! - The sorted, immutable catalog store
//! - Substring search helpers
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod loader;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use loader::{load_from_path, load_from_reader};
pub use models::{Beer, BeerId};
pub use store::CatalogStore;
