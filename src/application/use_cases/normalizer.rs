// ============================================================
// PRODUCT NORMALIZER
// ============================================================
// Infer header roles and build validated products from raw rows

use tracing::debug;
use uuid::Uuid;

use crate::domain::app_config::ImportSettings;
use crate::domain::catalog::{CellValue, HeaderMapping, Product, ProductField, RawRow, HEADER_RULES};
use crate::domain::error::ImportError;

/// Products built from one row set
#[derive(Debug, Clone)]
pub struct NormalizedCatalog {
    pub products: Vec<Product>,
    pub count: usize,
    pub dropped: usize,
    pub mapping: HeaderMapping,
}

/// Turns heterogeneous rows into a uniform product list
pub struct ProductNormalizer {
    settings: ImportSettings,
}

impl ProductNormalizer {
    pub fn new(settings: ImportSettings) -> Self {
        Self { settings }
    }

    /// Resolve which header feeds each product field.
    ///
    /// For every field the first header (in column order) containing one of
    /// the field's keywords wins. Name and price are mandatory.
    pub fn infer_headers<S: AsRef<str>>(headers: &[S]) -> Result<HeaderMapping, ImportError> {
        let find = |field: ProductField| {
            headers
                .iter()
                .map(|header| header.as_ref())
                .find(|header: &&str| field.matches_header(header))
                .map(str::to_string)
        };

        let mut name = None;
        let mut price = None;
        let mut active_ingredient = None;
        let mut company = None;
        let mut description = None;

        for (field, _) in HEADER_RULES {
            let header = find(*field);
            match field {
                ProductField::Name => name = header,
                ProductField::Price => price = header,
                ProductField::ActiveIngredient => active_ingredient = header,
                ProductField::Company => company = header,
                ProductField::Description => description = header,
            }
        }

        match (name, price) {
            (Some(name), Some(price)) => Ok(HeaderMapping {
                name,
                price,
                active_ingredient,
                company,
                description,
            }),
            (name, price) => {
                let mut missing = Vec::new();
                if name.is_none() {
                    missing.push(ProductField::Name);
                }
                if price.is_none() {
                    missing.push(ProductField::Price);
                }
                Err(ImportError::MissingRequiredColumns(missing))
            }
        }
    }

    /// Normalize a decoded row set.
    ///
    /// Rows with a blank name or a price that is not a positive finite number
    /// are dropped silently; only the counts reflect them.
    pub fn normalize(&self, rows: &[RawRow]) -> Result<NormalizedCatalog, ImportError> {
        let first = rows.first().ok_or(ImportError::EmptyInput)?;
        let headers: Vec<&str> = first.headers().collect();
        let mapping = Self::infer_headers(headers.as_slice())?;

        debug!(
            name = %mapping.name,
            price = %mapping.price,
            active_ingredient = ?mapping.active_ingredient,
            company = ?mapping.company,
            description = ?mapping.description,
            "Resolved import headers"
        );

        let batch_token = Uuid::new_v4().simple().to_string();
        let products: Vec<Product> = rows
            .iter()
            .enumerate()
            .filter_map(|(index, row)| self.build_product(index, row, &mapping, &batch_token))
            .collect();

        let dropped = rows.len() - products.len();
        if dropped > 0 {
            debug!(dropped, total = rows.len(), "Dropped rows without a name or positive price");
        }

        if products.is_empty() {
            return Err(ImportError::NoValidRows);
        }

        Ok(NormalizedCatalog {
            count: products.len(),
            products,
            dropped,
            mapping,
        })
    }

    fn build_product(
        &self,
        index: usize,
        row: &RawRow,
        mapping: &HeaderMapping,
        batch_token: &str,
    ) -> Option<Product> {
        let text_of = |field: ProductField| {
            mapping
                .header_for(field)
                .and_then(|header| row.get(header))
                .and_then(CellValue::as_text)
        };

        let name = text_of(ProductField::Name)?;
        let price = row
            .get(&mapping.price)
            .map(CellValue::as_price)
            .unwrap_or(0.0);
        if !(price.is_finite() && price > 0.0) {
            return None;
        }

        Some(Product {
            id: format!("imported-{}-{}", index, batch_token),
            active_ingredient: text_of(ProductField::ActiveIngredient)
                .unwrap_or_else(|| self.settings.missing_ingredient.clone()),
            company: text_of(ProductField::Company)
                .unwrap_or_else(|| self.settings.unknown_company.clone()),
            description: text_of(ProductField::Description).unwrap_or_else(|| name.clone()),
            name,
            price,
            category: Some(self.settings.category_label.clone()),
        })
    }
}

impl Default for ProductNormalizer {
    fn default() -> Self {
        Self::new(ImportSettings::default())
    }
}
