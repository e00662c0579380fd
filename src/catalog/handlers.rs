//! REST API handlers for the beer catalog

use super::models::{Beer, BeerId, SearchParams};
use crate::error::{Result, ServiceError};
use crate::helpers::parse_id;
use crate::state::SharedState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

/// Creates routes for catalog queries
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/beer", get(list_beers))
        .route("/beer/", get(list_beers))
        .route("/beer/search", get(search_beers))
        .route("/beer/:id", get(get_beer))
}

/// Endpoint: GET /beer
/// Lists the whole catalog in ascending id order.
async fn list_beers(State(state): State<SharedState>) -> Json<Vec<Beer>> {
    Json(state.list_catalog())
}

/// Endpoint: GET /beer/search?q=
async fn search_beers(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Beer>>> {
    let query = params
        .q
        .ok_or_else(|| ServiceError::invalid("missing search parameter q"))?;
    Ok(Json(state.search_catalog(&query)))
}

/// Endpoint: GET /beer/:id
async fn get_beer(State(state): State<SharedState>, Path(id): Path<String>) -> Result<Json<Beer>> {
    let id: BeerId = parse_id(&id, "beer")?;
    state.lookup_catalog_item(id).map(Json)
}
