//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use crate::catalog::{Beer, BeerId};
use crate::error::ServiceError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Identifier allocated to a cart by the registry
pub type CartId = u64;

/// A shopping cart. Holds snapshots of catalog beers, at most one per beer id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    pub id: CartId,
    pub beers: Vec<Beer>,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            beers: Vec::new(),
        }
    }
}

/// Mutation applied by `PUT /cart/:id`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOp {
    Add,
    Remove,
}

impl FromStr for CartOp {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            other => Err(ServiceError::invalid(format!(
                "invalid cart operation {:?}, expected \"add\" or \"remove\"",
                other
            ))),
        }
    }
}

impl fmt::Display for CartOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "add",
            Self::Remove => "remove",
        })
    }
}

/// Body of `PUT /cart/:id`
#[derive(Debug, Deserialize)]
pub struct UpdateCartInput {
    /// Catalog id of the beer to add or remove
    pub beer_id: BeerId,

    /// Either "add" or "remove"; parsed into a [`CartOp`] by the handler
    pub op: String,
}
