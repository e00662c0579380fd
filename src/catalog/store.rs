//! Catalog Store
//!
//! Holds the beer list loaded at startup. The list is sorted once on
//! construction and never mutated again, so reads need no lock and the
//! store can be shared behind a plain `Arc`.

use super::models::{Beer, BeerId};
use crate::error::LoadError;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct CatalogStore {
    /// Sorted ascending by id
    beers: Vec<Beer>,
    /// Position of each id in `beers`
    index: HashMap<BeerId, usize>,
}

impl CatalogStore {
    /// Builds a store from beers in any order.
    ///
    /// Fails if two beers share an id, since the listing must be strictly
    /// ascending.
    pub fn from_beers(mut beers: Vec<Beer>) -> Result<Self, LoadError> {
        beers.sort_by_key(|b| b.id);

        let mut index = HashMap::with_capacity(beers.len());
        for (pos, beer) in beers.iter().enumerate() {
            if index.insert(beer.id, pos).is_some() {
                return Err(LoadError::DuplicateId(beer.id));
            }
        }

        Ok(Self { beers, index })
    }

    /// Every beer, ascending by id.
    pub fn list_all(&self) -> Vec<Beer> {
        self.beers.clone()
    }

    /// Borrowing iterator over the sorted listing.
    pub fn iter(&self) -> impl Iterator<Item = &Beer> {
        self.beers.iter()
    }

    /// Returns a copy of the beer, or `None` if the id is not in the catalog.
    pub fn get_by_id(&self, id: BeerId) -> Option<Beer> {
        self.index.get(&id).map(|&pos| self.beers[pos].clone())
    }

    pub fn len(&self) -> usize {
        self.beers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beers.is_empty()
    }
}
