// ============================================================
// PRODUCT FIELDS & HEADER RULES
// ============================================================
// Semantic product fields and the keywords that identify their columns

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic product field a spreadsheet column can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductField {
    Name,
    ActiveIngredient,
    Company,
    Price,
    Description,
}

/// Ordered (field, keywords) rule table used for header inference.
///
/// A header matches a field when its lowercased text contains any keyword.
/// "اسم" matches the bare form as well as "الاسم".
pub const HEADER_RULES: &[(ProductField, &[&str])] = &[
    (ProductField::Name, &["name", "item", "product", "الاسم", "اسم"]),
    (
        ProductField::ActiveIngredient,
        &["active", "ingredient", "composition", "effect", "المادة الفعالة"],
    ),
    (ProductField::Company, &["company", "manufacturer", "الشركة"]),
    (ProductField::Price, &["price", "cost", "السعر"]),
    (
        ProductField::Description,
        &["desc", "form", "dosage", "type", "description"],
    ),
];

impl ProductField {
    /// Keywords identifying this field's column
    pub fn keywords(&self) -> &'static [&'static str] {
        HEADER_RULES
            .iter()
            .find(|(field, _)| field == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    /// Whether `header` names this field
    pub fn matches_header(&self, header: &str) -> bool {
        let header = header.to_lowercase();
        self.keywords().iter().any(|keyword| header.contains(keyword))
    }

    /// Human-readable label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            ProductField::Name => "Name",
            ProductField::ActiveIngredient => "Active Ingredient",
            ProductField::Company => "Company",
            ProductField::Price => "Price",
            ProductField::Description => "Description",
        }
    }

    /// Column name used by the export template
    pub fn column(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::ActiveIngredient => "activeIngredient",
            ProductField::Company => "company",
            ProductField::Price => "price",
            ProductField::Description => "description",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}
