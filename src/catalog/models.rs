//! Catalog Domain Models
//!
//! The beer record mirrors the catalog data file field for field, so a beer
//! serializes back out in exactly the shape it was loaded from.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// Identifier assigned to a beer by the catalog data source
pub type BeerId = u32;

/// A measured quantity such as a batch volume
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measure {
    pub value: i64,
    pub unit: String,
}

/// A catalog item. Immutable once loaded; carts hold clones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Beer {
    pub id: BeerId,
    pub name: String,
    pub tagline: String,
    pub first_brewed: String,
    pub description: String,
    pub image_url: String,
    #[serde(serialize_with = "number::serialize")]
    pub price: f64,
    #[serde(with = "nullable_number")]
    pub abv: Option<f64>,
    #[serde(with = "nullable_number")]
    pub ibu: Option<f64>,
    #[serde(with = "nullable_number")]
    pub target_fg: Option<f64>,
    #[serde(with = "nullable_number")]
    pub target_og: Option<f64>,
    #[serde(with = "nullable_number")]
    pub ebc: Option<f64>,
    #[serde(with = "nullable_number")]
    pub srm: Option<f64>,
    #[serde(with = "nullable_number")]
    pub ph: Option<f64>,
    #[serde(with = "nullable_number")]
    pub attenuation_level: Option<f64>,
    pub volume: Measure,
    pub boil_volume: Measure,
    pub food_pairing: Vec<String>,
    pub brewers_tips: String,
    pub contributed_by: String,
}

/// Writes whole numbers without a fractional part, so `1010` in the data
/// file comes back out as `1010` rather than `1010.0`.
mod number {
    use super::Serializer;

    /// Largest magnitude an `f64` holds every integer up to.
    const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.fract() == 0.0 && value.abs() <= EXACT_INT_LIMIT {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }
}

/// Brewing metrics may be `null` in the data file. The field itself is still
/// required: a missing key fails the decode.
mod nullable_number {
    use super::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => super::number::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Option::<f64>::deserialize(deserializer)
    }
}

/// Query string for `GET /beer/search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring to look for; required, but may be empty
    pub q: Option<String>,
}
