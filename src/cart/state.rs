//! Shopping Cart State Management
//!
//! The registry owns every cart and the counter that hands out cart ids.
//! Callers never get a reference into the map: reads return copies and all
//! mutations run inside [`CartRegistry::update`] while the entry is locked.

use super::models::{Cart, CartId};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// Cart Registry
// =============================================================================

/// Concurrent map of cart id to cart.
#[derive(Debug, Default)]
pub struct CartRegistry {
    /// In-memory storage for carts, keyed by cart id.
    /// DashMap serializes access per shard, so no outer Mutex is needed.
    carts: DashMap<CartId, Cart>,

    /// Last id handed out; ids start at 1 and are never reused.
    last_id: AtomicU64,
}

impl CartRegistry {
    /// Creates an empty registry with the id counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> CartId {
        self.last_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Allocates a new id and stores an empty cart under it.
    pub fn create_cart(&self) -> Cart {
        let cart = Cart::new(self.next_id());
        self.carts.insert(cart.id, cart.clone());
        tracing::debug!(cart_id = cart.id, "cart created");
        cart
    }

    /// Returns the cart stored under `id`.
    ///
    /// An unknown `id` is not honoured: a new empty cart is created under a
    /// freshly allocated id, and that cart is returned instead.
    pub fn get_or_create(&self, id: CartId) -> Cart {
        let existing = self.carts.get(&id).map(|cart| cart.value().clone());
        match existing {
            Some(cart) => cart,
            None => {
                let cart = self.create_cart();
                tracing::debug!(requested = id, cart_id = cart.id, "unknown cart, substituted");
                cart
            }
        }
    }

    /// Returns a copy of the cart under `id` without creating anything.
    pub fn get(&self, id: CartId) -> Option<Cart> {
        self.carts.get(&id).map(|cart| cart.value().clone())
    }

    /// Applies `f` to the cart under `id` while holding its entry lock and
    /// returns the resulting cart.
    ///
    /// Follows [`get_or_create`](Self::get_or_create) for unknown ids: `f`
    /// runs against a new cart with a freshly allocated id.
    pub fn update<F>(&self, id: CartId, f: F) -> Cart
    where
        F: FnOnce(&mut Cart),
    {
        if let Some(mut entry) = self.carts.get_mut(&id) {
            f(entry.value_mut());
            return entry.value().clone();
        }

        let mut cart = Cart::new(self.next_id());
        tracing::debug!(requested = id, cart_id = cart.id, "unknown cart, substituted");
        f(&mut cart);
        self.carts.insert(cart.id, cart.clone());
        cart
    }

    /// Drops the cart under `id`, returning it if it existed.
    pub fn remove(&self, id: CartId) -> Option<Cart> {
        self.carts.remove(&id).map(|(_, cart)| cart)
    }

    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}
