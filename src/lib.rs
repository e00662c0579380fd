//! Beer Cart Library
//!
//! This library provides a read-only beer catalog and concurrent, in-memory
//! shopping carts, plus the HTTP surface that exposes them.

// Domain modules
pub mod cart;
pub mod catalog;

// Shared state, errors and request helpers
pub mod error;
pub mod helpers;
pub mod state;

// Infrastructure
pub mod config;
pub mod logger;
pub mod router;
