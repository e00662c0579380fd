//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (Cart, CartOp, update input)
//! - Business logic helpers (set-like add/remove, formatting)
//! - The concurrent cart registry
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Cart, CartId, CartOp};
pub use state::CartRegistry;
