pub mod catalog_import;
pub mod normalizer;
pub mod storefront;
pub mod template_export;
