// ============================================================
// CART
// ============================================================
// Quantities per product, tracked outside the Product itself

use serde::{Deserialize, Serialize};

use super::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,

    /// Never below 1
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Shopping cart keyed by product id, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`
    pub fn add(&mut self, product: &Product) {
        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            }),
        }
    }

    /// Shift the quantity of `id` by `delta`, clamped to at least 1.
    /// Returns false when the product is not in the cart.
    pub fn update_quantity(&mut self, id: &str, delta: i64) -> bool {
        match self.items.iter_mut().find(|item| item.product.id == id) {
            Some(item) => {
                let next = (i64::from(item.quantity) + delta).clamp(1, i64::from(u32::MAX));
                item.quantity = next as u32;
                true
            }
            None => false,
        }
    }

    /// Returns false when the product is not in the cart
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
