//! Helper utilities shared by the cart and catalog handlers

use crate::error::ServiceError;
use std::str::FromStr;

/// Parses a non-negative integer identifier taken from a request path.
///
/// `what` names the kind of id ("cart", "beer") in the error message.
pub fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, ServiceError> {
    raw.parse()
        .map_err(|_| ServiceError::invalid(format!("invalid {} id: {:?}", what, raw)))
}
