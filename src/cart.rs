use serde::Serialize;

use crate::models::{MenuItem, OrderItemRequest, OrderRequest};

/// One selected menu item with its quantity.
///
/// The display fields are copied from the [`MenuItem`] at add time, so a
/// price change in a re-fetched menu never retroactively changes a line the
/// user already has in the cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Always ≥ 1; a line that would reach 0 is removed instead.
    pub quantity: u32,
}

impl CartLine {
    fn from_item(item: &MenuItem) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            original_price: item.original_price,
            quantity: 1,
        }
    }
}

/// Client-held selection of menu items for one pending order.
///
/// Scoped to exactly one restaurant for its lifetime: the id is fixed at
/// construction and [`Cart::switch_restaurant`] clears every line when it
/// changes, so lines from two restaurants can never mix. Lines keep their
/// insertion order; quantity changes and removals never reorder the rest.
///
/// The cart has no failure modes. Unknown ids on quantity change or removal
/// are silent no-ops, mirroring how the menu screen drives it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Cart {
    restaurant_id: String,
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart bound to one restaurant's menu.
    pub fn for_restaurant(restaurant_id: &str) -> Self {
        Self {
            restaurant_id: restaurant_id.to_string(),
            lines: Vec::new(),
        }
    }

    pub fn restaurant_id(&self) -> &str {
        &self.restaurant_id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `item`: an existing line is incremented, otherwise a
    /// new line is appended with quantity 1. Always succeeds.
    pub fn add_item(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|l| l.item_id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::from_item(item)),
        }
    }

    /// Add `delta` (either sign) to the line's quantity, clamped at 0; a
    /// quantity that ends at 0 removes the line. Unknown ids are ignored.
    pub fn change_quantity(&mut self, item_id: &str, delta: i64) {
        if let Some(pos) = self.lines.iter().position(|l| l.item_id == item_id) {
            let next = i64::from(self.lines[pos].quantity)
                .saturating_add(delta)
                .max(0);
            if next == 0 {
                self.lines.remove(pos);
            } else {
                // Oversized deltas pin at u32::MAX rather than wrapping back
                // through 0 and breaking the quantity ≥ 1 invariant.
                self.lines[pos].quantity = u32::try_from(next).unwrap_or(u32::MAX);
            }
        }
    }

    /// Drop the line for `item_id` entirely. Idempotent.
    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Σ price × quantity. 0.0 for an empty cart. No currency rounding here;
    /// that belongs to rendering.
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.price * f64::from(l.quantity))
            .sum()
    }

    /// Σ quantity across all lines. 0 for an empty cart.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Rebind the cart when the user opens a different restaurant's menu.
    /// A changed id clears every line; the same id keeps the cart as is.
    pub fn switch_restaurant(&mut self, restaurant_id: &str) {
        if self.restaurant_id != restaurant_id {
            self.restaurant_id = restaurant_id.to_string();
            self.lines.clear();
        }
    }

    /// The wire body for submitting this cart as an order.
    pub fn order_request(&self) -> OrderRequest {
        OrderRequest {
            restaurant_id: self.restaurant_id.clone(),
            items: self
                .lines
                .iter()
                .map(|l| OrderItemRequest {
                    item_id: l.item_id.clone(),
                    quantity: l.quantity,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            price,
            description: None,
            category: None,
            original_price: None,
        }
    }

    #[test]
    fn empty_cart_has_zero_totals() {
        let cart = Cart::for_restaurant("rest-1");
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut cart = Cart::for_restaurant("rest-1");
        let samosa = item("it-1", "Samosa", 30.0);
        for _ in 0..5 {
            cart.add_item(&samosa);
        }
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn totals_over_two_lines() {
        let mut cart = Cart::for_restaurant("rest-1");
        let a = item("a", "Thali", 100.0);
        let b = item("b", "Chai", 50.0);
        cart.add_item(&a);
        cart.add_item(&a);
        cart.add_item(&b);
        assert_eq!(cart.total(), 250.0);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn menu_screen_scenario() {
        let mut cart = Cart::for_restaurant("rest-1");
        let a = item("a", "Biryani", 120.0);
        let b = item("b", "Raita", 80.0);

        cart.add_item(&a);
        assert_eq!((cart.total(), cart.item_count()), (120.0, 1));
        cart.add_item(&a);
        assert_eq!((cart.total(), cart.item_count()), (240.0, 2));
        cart.add_item(&b);
        assert_eq!((cart.total(), cart.item_count()), (320.0, 3));
        cart.change_quantity("a", -1);
        assert_eq!((cart.total(), cart.item_count()), (200.0, 2));
        cart.remove_item("b");
        assert_eq!((cart.total(), cart.item_count()), (120.0, 1));
    }

    #[test]
    fn decrementing_to_zero_or_below_removes_the_line() {
        let mut cart = Cart::for_restaurant("rest-1");
        let a = item("a", "Dosa", 90.0);
        cart.add_item(&a);
        cart.add_item(&a);

        cart.change_quantity("a", -5);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn oversized_deltas_never_leave_a_zero_quantity_line() {
        let mut cart = Cart::for_restaurant("rest-1");
        cart.add_item(&item("a", "Dosa", 90.0));

        // 1 + (2^32 - 1) = 2^32, which a plain u32 cast would wrap to 0.
        cart.change_quantity("a", (1i64 << 32) - 1);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
        assert!(cart.item_count() > 0);

        // Extreme deltas in either direction saturate instead of panicking.
        cart.change_quantity("a", i64::MAX);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
        cart.change_quantity("a", i64::MIN);
        assert!(cart.is_empty());
    }

    #[test]
    fn unknown_ids_are_silent_no_ops() {
        let mut cart = Cart::for_restaurant("rest-1");
        let a = item("a", "Dosa", 90.0);
        cart.add_item(&a);

        cart.change_quantity("missing", -3);
        cart.remove_item("missing");
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = Cart::for_restaurant("rest-1");
        let a = item("a", "Dosa", 90.0);
        cart.add_item(&a);

        cart.remove_item("a");
        let after_once = cart.clone();
        cart.remove_item("a");
        assert_eq!(cart, after_once);
    }

    #[test]
    fn mutations_preserve_insertion_order() {
        let mut cart = Cart::for_restaurant("rest-1");
        for (id, price) in [("a", 10.0), ("b", 20.0), ("c", 30.0)] {
            cart.add_item(&item(id, id, price));
        }
        cart.change_quantity("b", 4);
        cart.remove_item("a");

        let order: Vec<&str> = cart.lines().iter().map(|l| l.item_id.as_str()).collect();
        assert_eq!(order, vec!["b", "c"]);
    }

    #[test]
    fn lines_snapshot_the_price_at_add_time() {
        let mut cart = Cart::for_restaurant("rest-1");
        cart.add_item(&item("a", "Thali", 100.0));

        // The menu was re-fetched and the price went up; the existing line
        // keeps its snapshot, only the quantity moves.
        cart.add_item(&item("a", "Thali", 140.0));
        assert_eq!(cart.lines()[0].price, 100.0);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), 200.0);
    }

    #[test]
    fn switching_restaurants_clears_the_cart() {
        let mut cart = Cart::for_restaurant("rest-1");
        cart.add_item(&item("a", "Thali", 100.0));

        cart.switch_restaurant("rest-1");
        assert_eq!(cart.item_count(), 1);

        cart.switch_restaurant("rest-2");
        assert!(cart.is_empty());
        assert_eq!(cart.restaurant_id(), "rest-2");
    }

    #[test]
    fn order_request_carries_ids_and_quantities() {
        let mut cart = Cart::for_restaurant("rest-1");
        let a = item("a", "Thali", 100.0);
        cart.add_item(&a);
        cart.add_item(&a);
        cart.add_item(&item("b", "Chai", 50.0));

        let req = cart.order_request();
        assert_eq!(req.restaurant_id, "rest-1");
        assert_eq!(req.items.len(), 2);
        assert_eq!(req.items[0].item_id, "a");
        assert_eq!(req.items[0].quantity, 2);
        assert_eq!(req.items[1].quantity, 1);
    }
}
