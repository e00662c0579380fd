//! Catalog Search Helpers

use super::models::Beer;

/// Returns true if `query` occurs in the beer's name, description, tagline or
/// any of its food pairings. Case-sensitive; the empty query matches anything.
pub fn beer_matches(beer: &Beer, query: &str) -> bool {
    beer.name.contains(query)
        || beer.description.contains(query)
        || beer.tagline.contains(query)
        || beer.food_pairing.iter().any(|food| food.contains(query))
}

/// Filters `beers` down to the ones matching `query`, keeping their order.
pub fn search_beers<'a>(beers: impl IntoIterator<Item = &'a Beer>, query: &str) -> Vec<Beer> {
    beers
        .into_iter()
        .filter(|beer| beer_matches(beer, query))
        .cloned()
        .collect()
}
