// ============================================================
// STOREFRONT
// ============================================================
// Catalog, search/category filter and cart owned by one caller

use tracing::{debug, info};

use crate::domain::catalog::{Cart, ImportBatch, Product};
use crate::domain::error::{AppError, Result};

/// Session state: the current catalog plus the cart built against it
#[derive(Debug, Default)]
pub struct Storefront {
    products: Vec<Product>,
    cart: Cart,
    search: String,
    category: Option<String>,
    loaded: bool,
}

impl Storefront {
    /// Replace the catalog with a freshly imported batch.
    /// The cart survives; the category filter does not.
    pub fn apply_import(&mut self, batch: ImportBatch) {
        info!(source = %batch.source, count = batch.count, "Catalog replaced");
        self.products = batch.products;
        self.category = None;
        self.loaded = true;
    }

    pub fn reset(&mut self) {
        self.products.clear();
        self.cart.clear();
        self.search.clear();
        self.category = None;
        self.loaded = false;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category.filter(|c| !c.trim().is_empty());
    }

    /// Distinct non-empty categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for category in self.products.iter().filter_map(|p| p.category.as_deref()) {
            if !category.is_empty() && !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    /// Products matching the search query and the active category
    pub fn filtered_products(&self) -> Vec<&Product> {
        let needle = self.search.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.matches_query(&needle) && p.in_category(self.category()))
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    // ==================== CART ====================

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_to_cart(&mut self, id: &str) -> Result<()> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Product {}", id)))?;

        self.cart.add(product);
        debug!(id, items = self.cart.total_items(), "Added to cart");
        Ok(())
    }

    pub fn update_quantity(&mut self, id: &str, delta: i64) -> Result<()> {
        if self.cart.update_quantity(id, delta) {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Cart item {}", id)))
        }
    }

    pub fn remove_from_cart(&mut self, id: &str) -> Result<()> {
        if self.cart.remove(id) {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Cart item {}", id)))
        }
    }

    pub fn cart_total_items(&self) -> u64 {
        self.cart.total_items()
    }

    pub fn cart_total_price(&self) -> f64 {
        self.cart.total_price()
    }

    /// Checkout is not wired to any payment flow; the cart is left as is
    pub fn checkout(&self) -> &'static str {
        "Checkout is not available yet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{sample_products, HeaderMapping};
    use chrono::Utc;

    fn product(id: &str, name: &str, company: &str, price: f64, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            active_ingredient: "Paracetamol".to_string(),
            company: company.to_string(),
            price,
            description: name.to_string(),
            category: Some(category.to_string()),
        }
    }

    fn batch(products: Vec<Product>) -> ImportBatch {
        ImportBatch {
            source: "catalog.csv".to_string(),
            count: products.len(),
            products,
            dropped: 0,
            mapping: HeaderMapping {
                name: "Name".to_string(),
                price: "Price".to_string(),
                active_ingredient: None,
                company: None,
                description: None,
            },
            imported_at: Utc::now(),
        }
    }

    fn sample_store() -> Storefront {
        let mut store = Storefront::default();
        store.apply_import(batch(sample_products()));
        store
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let mut store = Storefront::default();
        store.apply_import(batch(vec![
            product("1", "A", "X", 1.0, "Vitamins"),
            product("2", "B", "X", 1.0, "Pain Relief"),
            product("3", "C", "X", 1.0, "Vitamins"),
            product("4", "D", "X", 1.0, ""),
        ]));

        assert_eq!(store.categories(), vec!["Vitamins", "Pain Relief"]);
    }

    #[test]
    fn test_search_covers_name_ingredient_and_company() {
        let mut store = sample_store();
        let mut hits = |q: &str| {
            store.set_search(q);
            store.filtered_products().len()
        };

        assert_eq!(hits("panadol"), 1);
        assert_eq!(hits("PARACETAMOL"), 4);
        assert_eq!(hits("sanofi"), 3);
        assert_eq!(hits(""), 30);
        assert_eq!(hits("zzz"), 0);
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let mut store = sample_store();
        store.set_search(" ");

        let with_space = sample_products()
            .iter()
            .filter(|p| {
                p.name.contains(' ') || p.active_ingredient.contains(' ') || p.company.contains(' ')
            })
            .count();
        assert_eq!(store.filtered_products().len(), with_space);

        store.set_search("  panadol");
        assert!(store.filtered_products().is_empty());
    }

    #[test]
    fn test_category_filter_combines_with_search() {
        let mut store = sample_store();
        store.set_category(Some("Pain Relief".to_string()));
        assert_eq!(store.filtered_products().len(), 8);

        store.set_search("diclofenac");
        assert_eq!(store.filtered_products().len(), 3);

        store.set_category(None);
        assert_eq!(store.filtered_products().len(), 3);
    }

    #[test]
    fn test_import_replaces_catalog_and_keeps_cart() {
        let mut store = sample_store();
        store.add_to_cart("4").unwrap();
        store.set_category(Some("Vitamins".to_string()));

        store.apply_import(batch(vec![product("imported-0-x", "Panadol", "GSK", 46.0, "Imported")]));

        assert_eq!(store.products().len(), 1);
        assert_eq!(store.category(), None);
        assert_eq!(store.cart_total_items(), 1);
        assert_eq!(store.cart_total_price(), 24.0);
    }

    #[test]
    fn test_cart_flow() {
        let mut store = sample_store();
        store.add_to_cart("4").unwrap();
        store.add_to_cart("4").unwrap();
        store.add_to_cart("11").unwrap();

        assert_eq!(store.cart_total_items(), 3);
        assert_eq!(store.cart_total_price(), 24.0 * 2.0 + 78.0);

        store.update_quantity("4", -5).unwrap();
        assert_eq!(store.cart().items()[0].quantity, 1);

        store.remove_from_cart("11").unwrap();
        assert_eq!(store.cart_total_items(), 1);
        assert!(matches!(store.remove_from_cart("11"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_add_unknown_product() {
        let mut store = sample_store();
        let err = store.add_to_cart("nope").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_checkout_is_inert() {
        let mut store = sample_store();
        store.add_to_cart("1").unwrap();
        let before = store.cart().clone();

        assert!(!store.checkout().is_empty());
        assert_eq!(store.cart(), &before);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = sample_store();
        store.add_to_cart("1").unwrap();
        store.set_search("abimol");
        store.set_category(Some("Pain Relief".to_string()));

        store.reset();

        assert!(!store.is_loaded());
        assert!(store.products().is_empty());
        assert!(store.cart().is_empty());
        assert_eq!(store.search(), "");
        assert_eq!(store.category(), None);
    }
}
