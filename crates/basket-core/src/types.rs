//! # Line-Item Types
//!
//! The cart line item and the descriptor used to add one.
//!
//! ## Wire Format
//! The persisted cart record is a JSON array of [`CartItem`] objects with
//! exactly these fields:
//! ```json
//! [
//!   { "id": "a7c2", "title": "Running Shoe", "image_url": "https://…",
//!     "price": 129.9, "quantity": 2 }
//! ]
//! ```
//! Field names are stable: the same shape is read back on restore, so any
//! rename is a storage-format migration.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One line entry in the shopping cart.
///
/// ## Invariants (maintained by [`crate::Cart`])
/// - At most one `CartItem` per `id` exists in a cart at any time
/// - `quantity` is never retained at 0: decrementing a quantity-1 line
///   removes it entirely
///
/// `price` is the unit price captured when the item entered the cart. This
/// crate stores it verbatim and performs no arithmetic on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Product identifier. Lines are matched by equality on this field.
    pub id: String,

    /// Display name.
    pub title: String,

    /// Display image reference.
    pub image_url: String,

    /// Unit price. Never mutated by cart operations.
    pub price: f64,

    /// Quantity in cart, always >= 1 for a retained line.
    pub quantity: i64,
}

impl CartItem {
    /// Creates the initial line for a freshly added product (quantity 1).
    pub fn from_new(item: &NewCartItem) -> Self {
        CartItem {
            id: item.id.clone(),
            title: item.title.clone(),
            image_url: item.image_url.clone(),
            price: item.price,
            quantity: 1,
        }
    }
}

/// An item descriptor without a quantity, as handed over by the UI when a
/// product is added to the cart.
///
/// Field contents are not validated; the cart trusts whatever the catalog
/// screen provides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewCartItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoe() -> NewCartItem {
        NewCartItem {
            id: "a7c2".to_string(),
            title: "Running Shoe".to_string(),
            image_url: "https://cdn.example.com/shoe.png".to_string(),
            price: 129.9,
        }
    }

    #[test]
    fn test_from_new_starts_at_quantity_one() {
        let line = CartItem::from_new(&shoe());
        assert_eq!(line.quantity, 1);
        assert_eq!(line.id, "a7c2");
        assert_eq!(line.price, 129.9);
    }

    #[test]
    fn test_wire_field_names() {
        let line = CartItem::from_new(&shoe());
        let json = serde_json::to_value(&line).unwrap();

        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("title"));
        assert!(obj.contains_key("image_url"));
        assert!(obj.contains_key("price"));
        assert!(obj.contains_key("quantity"));
        assert_eq!(obj.len(), 5);
    }

    #[test]
    fn test_serde_round_trip_is_field_for_field() {
        let line = CartItem {
            id: "b1".to_string(),
            title: "Mug".to_string(),
            image_url: "https://cdn.example.com/mug.png".to_string(),
            price: 9.5,
            quantity: 3,
        };

        let json = serde_json::to_string(&line).unwrap();
        let back: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
