use serde::Serialize;

use crate::domain::catalog::Product;

/// Column order of every exported file; the internal id is never written
pub const EXPORT_COLUMNS: [&str; 6] = [
    "name",
    "activeIngredient",
    "company",
    "price",
    "description",
    "category",
];

/// One exported product row
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow<'a> {
    pub name: &'a str,
    pub active_ingredient: &'a str,
    pub company: &'a str,
    pub price: String,
    pub description: &'a str,
    pub category: &'a str,
}

impl<'a> From<&'a Product> for ExportRow<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            name: &product.name,
            active_ingredient: &product.active_ingredient,
            company: &product.company,
            price: format_price(product.price),
            description: &product.description,
            category: product.category.as_deref().unwrap_or_default(),
        }
    }
}

/// Shortest decimal form: 46 rather than 46.0
pub fn format_price(price: f64) -> String {
    price.to_string()
}
