//! Application State
//!
//! Process-scoped state handed to the router. Every operation the HTTP layer
//! exposes is a method here, composing the catalog store and the cart
//! registry.

use crate::cart::{
    helpers::{add_beer_to_cart, format_cart_summary, remove_beer_from_cart},
    models::{Cart, CartId, CartOp},
    state::CartRegistry,
};
use crate::catalog::{helpers::search_beers, Beer, BeerId, CatalogStore};
use crate::error::{Result, ServiceError};
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: the loaded catalog and the live carts
#[derive(Debug)]
pub struct AppState {
    catalog: CatalogStore,
    carts: CartRegistry,
}

impl AppState {
    /// Wraps a loaded catalog with an empty cart registry.
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            catalog,
            carts: CartRegistry::new(),
        }
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    pub fn create_cart(&self) -> Cart {
        self.carts.create_cart()
    }

    /// Get-or-create: an unknown id yields a new cart under a new id.
    pub fn get_cart(&self, id: CartId) -> Cart {
        self.carts.get_or_create(id)
    }

    /// Deleting an unknown cart is a no-op.
    pub fn delete_cart(&self, id: CartId) {
        if let Some(cart) = self.carts.remove(id) {
            tracing::debug!(cart_id = id, beers = %format_cart_summary(&cart), "cart deleted");
        }
    }

    /// Adds or removes a catalog beer.
    ///
    /// The beer must exist in the catalog; otherwise nothing is touched. The
    /// cart is resolved like [`get_cart`](Self::get_cart).
    pub fn mutate_cart(&self, id: CartId, beer_id: BeerId, op: CartOp) -> Result<Cart> {
        let beer = self.lookup_catalog_item(beer_id)?;

        let cart = self.carts.update(id, |cart| {
            let changed = match op {
                CartOp::Add => add_beer_to_cart(cart, beer),
                CartOp::Remove => remove_beer_from_cart(cart, &beer),
            };
            tracing::debug!(cart_id = cart.id, beer_id, %op, changed, "cart updated");
        });

        Ok(cart)
    }

    // =========================================================================
    // Catalog operations
    // =========================================================================

    pub fn list_catalog(&self) -> Vec<Beer> {
        self.catalog.list_all()
    }

    pub fn search_catalog(&self, query: &str) -> Vec<Beer> {
        search_beers(self.catalog.iter(), query)
    }

    pub fn lookup_catalog_item(&self, id: BeerId) -> Result<Beer> {
        self.catalog
            .get_by_id(id)
            .ok_or_else(|| ServiceError::beer_not_found(id))
    }
}
