//! Shopping Cart Business Logic Helpers
//!
//! This module contains the set-like add/remove rules for a cart's beers and
//! small formatting helpers.

use super::models::Cart;
use crate::catalog::Beer;

/// Appends `beer` unless the cart already holds a beer with the same id.
///
/// Returns whether the cart changed.
pub fn add_beer_to_cart(cart: &mut Cart, beer: Beer) -> bool {
    if cart.beers.iter().any(|b| b.id == beer.id) {
        return false;
    }
    cart.beers.push(beer);
    true
}

/// Removes the first beer whose id matches `beer`, keeping the others in order.
///
/// Returns whether the cart changed.
pub fn remove_beer_from_cart(cart: &mut Cart, beer: &Beer) -> bool {
    match cart.beers.iter().position(|b| b.id == beer.id) {
        Some(pos) => {
            cart.beers.remove(pos);
            true
        }
        None => false,
    }
}

/// Produces a human-readable one-line summary of a cart's beers.
///
/// Example output: `"#1 Buzz, #3 Berliner Weisse"`.
pub fn format_cart_summary(cart: &Cart) -> String {
    cart.beers
        .iter()
        .map(|b| format!("#{} {}", b.id, b.name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::beer;

    fn ids(cart: &Cart) -> Vec<u32> {
        cart.beers.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_repeated_add_keeps_one_entry() {
        let mut cart = Cart::new(1);

        assert!(add_beer_to_cart(&mut cart, beer(1, "Buzz")));
        assert!(!add_beer_to_cart(&mut cart, beer(1, "Buzz")));
        assert!(add_beer_to_cart(&mut cart, beer(2, "Blonde")));
        assert!(!add_beer_to_cart(&mut cart, beer(1, "Buzz again")));

        assert_eq!(ids(&cart), vec![1, 2]);
        assert_eq!(cart.beers[0].name, "Buzz");
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut cart = Cart::new(1);
        for id in [1, 2, 3] {
            add_beer_to_cart(&mut cart, beer(id, "x"));
        }

        assert!(remove_beer_from_cart(&mut cart, &beer(2, "x")));
        assert_eq!(ids(&cart), vec![1, 3]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new(1);
        add_beer_to_cart(&mut cart, beer(1, "x"));
        let before = cart.clone();

        assert!(!remove_beer_from_cart(&mut cart, &beer(9, "x")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_format_cart_summary() {
        let mut cart = Cart::new(1);
        add_beer_to_cart(&mut cart, beer(1, "Buzz"));
        add_beer_to_cart(&mut cart, beer(3, "Berliner Weisse"));
        assert_eq!(format_cart_summary(&cart), "#1 Buzz, #3 Berliner Weisse");
    }
}
