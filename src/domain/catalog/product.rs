// ============================================================
// PRODUCT TYPES
// ============================================================
// Normalized catalog entries and the result of one import

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProductField;

/// A normalized catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Generated at import time, never read from the source file
    pub id: String,

    pub name: String,

    pub active_ingredient: String,

    pub company: String,

    /// Always finite and > 0 for imported products
    pub price: f64,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    /// Case-insensitive search over name, active ingredient and company.
    /// `needle` must already be lowercased.
    pub fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.active_ingredient.to_lowercase().contains(needle)
            || self.company.to_lowercase().contains(needle)
    }

    pub fn in_category(&self, category: Option<&str>) -> bool {
        match category {
            Some(category) => self.category.as_deref() == Some(category),
            None => true,
        }
    }
}

/// Headers resolved for each product field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderMapping {
    pub name: String,
    pub price: String,
    pub active_ingredient: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
}

impl HeaderMapping {
    pub fn header_for(&self, field: ProductField) -> Option<&str> {
        match field {
            ProductField::Name => Some(self.name.as_str()),
            ProductField::Price => Some(self.price.as_str()),
            ProductField::ActiveIngredient => self.active_ingredient.as_deref(),
            ProductField::Company => self.company.as_deref(),
            ProductField::Description => self.description.as_deref(),
        }
    }
}

/// Products produced by one successful import
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportBatch {
    /// Name of the file the batch came from
    pub source: String,

    pub products: Vec<Product>,

    /// Number of products kept, equal to `products.len()`
    pub count: usize,

    /// Rows dropped for a blank name or non-positive price
    pub dropped: usize,

    pub mapping: HeaderMapping,

    pub imported_at: DateTime<Utc>,
}
