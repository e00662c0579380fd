//! REST API handlers for shopping cart operations
//!
//! This module implements the HTTP endpoints for creating, reading, updating
//! and deleting carts.

use super::models::*;
use crate::helpers::parse_id;
use crate::error::{Result, ServiceError};
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", post(create_cart))
        .route(
            "/cart/:id",
            get(get_cart).put(update_cart).delete(delete_cart),
        )
}

/// Endpoint: POST /cart
/// Creates an empty cart under a new id.
async fn create_cart(State(state): State<SharedState>) -> Json<Cart> {
    Json(state.create_cart())
}

/// Endpoint: GET /cart/:id
/// Returns the cart, or a brand-new cart if the id is unknown.
async fn get_cart(State(state): State<SharedState>, Path(id): Path<String>) -> Result<Json<Cart>> {
    let id: CartId = parse_id(&id, "cart")?;
    Ok(Json(state.get_cart(id)))
}

/// Endpoint: PUT /cart/:id
/// Adds a beer to, or removes a beer from, the cart.
async fn update_cart(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<UpdateCartInput>, JsonRejection>,
) -> Result<Json<Cart>> {
    let id: CartId = parse_id(&id, "cart")?;
    let Json(input) = body.map_err(|e| ServiceError::invalid(e.body_text()))?;
    let op: CartOp = input.op.parse()?;

    state.mutate_cart(id, input.beer_id, op).map(Json)
}

/// Endpoint: DELETE /cart/:id
/// Drops the cart and echoes the id back.
async fn delete_cart(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<CartId>> {
    let id: CartId = parse_id(&id, "cart")?;
    state.delete_cart(id);
    Ok(Json(id))
}
