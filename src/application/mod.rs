pub mod use_cases;

pub use use_cases::catalog_import::CatalogImporter;
pub use use_cases::normalizer::{NormalizedCatalog, ProductNormalizer};
pub use use_cases::storefront::Storefront;
pub use use_cases::template_export::{export_products, export_template, ExportFormat};
