//! # Cart Operations
//!
//! The ordered cart and its three mutation operations.
//!
//! ## Invariants
//! - Lines are unique by `id` (adding an existing product bumps quantity)
//! - Order is insertion order; quantity changes never reorder lines
//! - A line decremented at quantity 1 is removed, never kept at 0
//! - Operations are total: an unknown `id` is a silent no-op
//!
//! ## Copy-on-Write
//! Every operation takes `&self` and returns a fresh [`Cart`]. A snapshot
//! handed to a consumer stays exactly as it was, no matter what happens to
//! the live cart afterwards.

use crate::types::{CartItem, NewCartItem};

/// The shopping cart: an insertion-ordered sequence of [`CartItem`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Rebuilds a cart from a restored line list.
    ///
    /// The list is trusted verbatim: restore does not re-validate shape or
    /// quantities, it installs exactly what storage returned.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Cart { items }
    }

    /// Adds a product to the cart, or bumps its quantity if already present.
    ///
    /// ## Behavior
    /// - First line matching `item.id`: quantity + 1, position unchanged
    /// - No match: a new quantity-1 line is appended at the end
    ///
    /// Adding a duplicate is not an error; it is the defined way to increase
    /// quantity via "add".
    pub fn add(&self, item: &NewCartItem) -> Cart {
        let mut items = self.items.clone();

        match items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity += 1,
            None => items.push(CartItem::from_new(item)),
        }

        Cart { items }
    }

    /// Increments the quantity of the line matching `id`.
    ///
    /// Unknown `id`: returns an identical cart (no error, no change).
    pub fn increment(&self, id: &str) -> Cart {
        let mut items = self.items.clone();

        if let Some(line) = items.iter_mut().find(|line| line.id == id) {
            line.quantity += 1;
        }

        Cart { items }
    }

    /// Decrements the quantity of the line matching `id`.
    ///
    /// ## Behavior
    /// - Found at quantity 1: the line is removed entirely
    /// - Found at quantity > 1: quantity - 1, position unchanged
    /// - Unknown `id`: returns an identical cart
    pub fn decrement(&self, id: &str) -> Cart {
        let mut items = self.items.clone();

        if let Some(pos) = items.iter().position(|line| line.id == id) {
            if items[pos].quantity == 1 {
                items.remove(pos);
            } else {
                items[pos].quantity -= 1;
            }
        }

        Cart { items }
    }

    /// Returns the lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consumes the cart, returning the owned line list.
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Returns the first line matching `id`, if any.
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|line| line.id == id)
    }

    /// Checks whether a line with this `id` is present.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
