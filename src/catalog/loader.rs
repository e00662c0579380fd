//! Catalog Loader
//!
//! Reads the beer data file once at startup. The whole file either decodes
//! into a valid catalog or the load fails; there are no partial loads.

use super::{models::Beer, store::CatalogStore};
use crate::error::LoadError;
use std::{fs::File, io::BufReader, io::Read, path::Path};

/// Loads the catalog from a JSON file on disk.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<CatalogStore, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let store = load_from_reader(BufReader::new(file))?;
    tracing::info!(beers = store.len(), path = %path.display(), "catalog loaded");
    Ok(store)
}

/// Loads the catalog from any reader yielding a JSON array of beers.
pub fn load_from_reader(reader: impl Read) -> Result<CatalogStore, LoadError> {
    let beers: Vec<Beer> = serde_json::from_reader(reader)?;
    CatalogStore::from_beers(beers)
}
